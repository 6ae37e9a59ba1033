//! Rate-limit retry helpers.
//!
//! Three stateless steps, composed by the caller (or by
//! [`RetryAfterClient`](crate::interceptor::RetryAfterClient)):
//! [`is_retryable`] classifies a failure, [`wait`] sleeps for the server's
//! `Retry-After` delay, and [`retry`] reissues the stored request.

mod classify;
mod error;
mod run;
mod wait;

pub use classify::{is_retryable, retry_after_value, RETRY_AFTER, TOO_MANY_REQUESTS};
pub use error::{HttpError, HttpErrorKind, Response};
pub use run::retry;
pub use wait::{retry_after_delay, wait, wait_with_unit, DelayUnit};

//! Retry HTTP requests that were rejected with `429 Too Many Requests` once the
//! server's `Retry-After` delay has passed.
//!
//! The [`retry`] module holds the three building blocks; [`interceptor`] wires
//! them around any [`client::HttpClient`].

pub mod config;
pub mod logging;

pub mod client;
pub mod interceptor;
pub mod request;
pub mod retry;

pub use client::{CurlClient, HttpClient};
pub use interceptor::RetryAfterClient;
pub use request::{Headers, RequestConfig};
pub use retry::{DelayUnit, HttpError, HttpErrorKind, Response};

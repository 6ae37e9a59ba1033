//! Resubmit a failed request through the caller's client.

use super::error::HttpError;
use crate::request::RequestConfig;

/// Hands the error's stored request configuration to `client` and returns what
/// it returns (usually the future of the reissued request).
///
/// Errors without a configuration cannot be reissued: they come back as
/// `Err` untouched and `client` is never called.
pub fn retry<F, T>(client: F, error: HttpError) -> Result<T, HttpError>
where
    F: FnOnce(RequestConfig) -> T,
{
    match error.config {
        Some(config) => Ok(client(config)),
        None => Err(error),
    }
}

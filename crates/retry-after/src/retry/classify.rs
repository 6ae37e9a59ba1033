//! Decide whether a failed request was rate limited with a usable Retry-After.

use super::error::HttpError;

pub const TOO_MANY_REQUESTS: u16 = 429;
pub const RETRY_AFTER: &str = "retry-after";

/// Truthy `Retry-After` value of a 429 response, if any.
///
/// Empty values and numeric zero (`0`, `0.0`) count as absent.
pub fn retry_after_value(error: &HttpError) -> Option<&str> {
    let response = error.response()?;
    if response.status != TOO_MANY_REQUESTS {
        return None;
    }
    let value = response.headers.get(RETRY_AFTER)?.trim();
    if value.is_empty() || value.parse::<f64>().is_ok_and(|n| n == 0.0) {
        return None;
    }
    Some(value)
}

/// True iff the server answered 429 and told us how long to back off.
pub fn is_retryable(error: &HttpError) -> bool {
    retry_after_value(error).is_some()
}

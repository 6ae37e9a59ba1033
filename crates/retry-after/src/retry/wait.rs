//! Sleep for the delay the server asked for in `Retry-After`.

use super::classify::RETRY_AFTER;
use super::error::HttpError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unit applied to a numeric `Retry-After` value.
///
/// Defaults to milliseconds: the number is handed to the timer as-is, so
/// `Retry-After: 25` waits 25ms. HTTP defines the value in seconds; integrators
/// who want that reading select `Seconds` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayUnit {
    #[default]
    Milliseconds,
    Seconds,
}

impl DelayUnit {
    fn secs_per_unit(self) -> f64 {
        match self {
            DelayUnit::Milliseconds => 0.001,
            DelayUnit::Seconds => 1.0,
        }
    }
}

/// Convert a raw `Retry-After` value into a delay.
///
/// Anything that is not a positive finite number waits zero; values past
/// `Duration::MAX` saturate.
pub fn retry_after_delay(value: &str, unit: DelayUnit) -> Duration {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => {
            Duration::try_from_secs_f64(n * unit.secs_per_unit()).unwrap_or(Duration::MAX)
        }
        _ => Duration::ZERO,
    }
}

/// Waits for the error's `Retry-After` delay, read as milliseconds.
///
/// Call only after [`is_retryable`](super::is_retryable) returned true; an error
/// without the header resolves immediately.
pub async fn wait(error: &HttpError) {
    wait_with_unit(error, DelayUnit::default()).await
}

/// Like [`wait`] with an explicit unit for the header value.
pub async fn wait_with_unit(error: &HttpError, unit: DelayUnit) {
    let delay = error
        .response()
        .and_then(|r| r.headers.get(RETRY_AFTER))
        .map(|v| retry_after_delay(v, unit))
        .unwrap_or(Duration::ZERO);
    tracing::debug!(?delay, ?unit, "waiting before resubmitting rate-limited request");
    tokio::time::sleep(delay).await;
}

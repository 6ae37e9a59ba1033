//! Client wrapper that applies the retry helpers to every failed request.

use crate::client::{CurlClient, HttpClient};
use crate::config::RetryAfterConfig;
use crate::request::RequestConfig;
use crate::retry::{self, DelayUnit, HttpError, Response};
use std::future::Future;

/// Wraps an [`HttpClient`] and, whenever a request fails with a retryable 429,
/// waits for `Retry-After` and resubmits it through the inner client.
///
/// A resubmitted request that is rate limited again is handled the same way;
/// there is no attempt limit. Every other failure is returned unchanged.
#[derive(Debug, Clone)]
pub struct RetryAfterClient<C> {
    inner: C,
    unit: DelayUnit,
}

impl<C: HttpClient> RetryAfterClient<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            unit: DelayUnit::default(),
        }
    }

    /// Read numeric `Retry-After` values in `unit` instead of milliseconds.
    pub fn with_unit(mut self, unit: DelayUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl RetryAfterClient<CurlClient> {
    pub fn from_config(cfg: &RetryAfterConfig) -> Self {
        RetryAfterClient::new(CurlClient::new(cfg.client_config())).with_unit(cfg.retry_after_unit)
    }
}

impl<C: HttpClient + Sync> HttpClient for RetryAfterClient<C> {
    fn send(
        &self,
        config: RequestConfig,
    ) -> impl Future<Output = Result<Response, HttpError>> + Send {
        async move {
            let mut result = self.inner.send(config).await;
            loop {
                match result {
                    Err(err) if retry::is_retryable(&err) => {
                        tracing::debug!(
                            retry_after = retry::retry_after_value(&err),
                            "request rate limited: {}",
                            err
                        );
                        retry::wait_with_unit(&err, self.unit).await;
                        result = match retry::retry(|cfg| self.inner.send(cfg), err) {
                            Ok(resubmitted) => resubmitted.await,
                            Err(err) => return Err(err),
                        };
                    }
                    other => return other,
                }
            }
        }
    }
}

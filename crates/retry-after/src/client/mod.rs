//! HTTP client seam and the libcurl-backed implementation.

mod curl_client;
mod parse;

use crate::request::RequestConfig;
use crate::retry::{HttpError, Response};
use std::future::Future;

pub use curl_client::CurlClient;

/// Something that can issue a request described by a [`RequestConfig`].
///
/// Non-2xx responses are errors: they come back as [`HttpError`] carrying the
/// response and the configuration, ready for the retry helpers.
pub trait HttpClient {
    fn send(
        &self,
        config: RequestConfig,
    ) -> impl Future<Output = Result<Response, HttpError>> + Send;
}

//! `HttpClient` over libcurl's easy interface.
//!
//! Each request runs on tokio's blocking pool; curl transfers block the
//! calling thread.

use super::parse;
use super::HttpClient;
use crate::config::ClientConfig;
use crate::request::RequestConfig;
use crate::retry::{HttpError, Response};
use curl::easy::{Easy, List};
use std::future::Future;
use std::str;
use std::time::Duration;

/// Issues requests with a fresh curl easy handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    options: ClientConfig,
}

impl CurlClient {
    pub fn new(options: ClientConfig) -> Self {
        Self { options }
    }
}

impl HttpClient for CurlClient {
    fn send(
        &self,
        config: RequestConfig,
    ) -> impl Future<Output = Result<Response, HttpError>> + Send {
        let options = self.options.clone();
        async move {
            tokio::task::spawn_blocking(move || execute(&options, config))
                .await
                .unwrap_or_else(|e| Err(HttpError::other(format!("request task failed: {}", e))))
        }
    }
}

/// Runs the request and maps the outcome onto `HttpError`, keeping `config`
/// on every failure so it can be resubmitted.
fn execute(options: &ClientConfig, config: RequestConfig) -> Result<Response, HttpError> {
    match perform(options, &config) {
        Ok(response) if response.is_success() => Ok(response),
        Ok(response) => {
            tracing::debug!(
                "{} {} returned HTTP {}",
                config.method,
                config.url,
                response.status
            );
            Err(HttpError::status(response).with_config(config))
        }
        Err(e) => {
            tracing::debug!("{} {} failed: {}", config.method, config.url, e);
            Err(HttpError::transport(e).with_config(config))
        }
    }
}

fn perform(options: &ClientConfig, config: &RequestConfig) -> Result<Response, curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = Easy::new();
    easy.url(&config.url)?;
    if config.method.eq_ignore_ascii_case("HEAD") {
        easy.nobody(true)?;
    } else {
        if let Some(data) = &config.body {
            easy.post_fields_copy(data)?;
        }
        easy.custom_request(&config.method)?;
    }
    easy.follow_location(options.follow_redirects)?;
    easy.connect_timeout(Duration::from_secs(options.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(options.timeout_secs))?;

    if !config.headers.is_empty() {
        let mut list = List::new();
        for (k, v) in config.headers.iter() {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(Response {
        status: status as u16,
        headers: parse::parse_headers(&header_lines),
        body,
    })
}

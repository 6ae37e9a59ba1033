//! Request failure type consumed by the retry helpers.

use crate::request::{Headers, RequestConfig};
use thiserror::Error;

/// Response received from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What went wrong with a request.
#[derive(Debug, Error)]
pub enum HttpErrorKind {
    /// Plain failure with no HTTP exchange attached.
    #[error("{0}")]
    Other(String),
    /// Request was sent but no response came back (connect, DNS, timeout...).
    #[error("{0}")]
    Transport(#[source] curl::Error),
    /// Server answered with a non-2xx status.
    #[error("HTTP {}", .0.status)]
    Status(Response),
}

/// Failed request, optionally carrying the configuration needed to reissue it.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct HttpError {
    #[source]
    pub kind: HttpErrorKind,
    pub config: Option<RequestConfig>,
}

impl HttpError {
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::Other(message.into()),
            config: None,
        }
    }

    pub fn transport(e: curl::Error) -> Self {
        Self {
            kind: HttpErrorKind::Transport(e),
            config: None,
        }
    }

    pub fn status(response: Response) -> Self {
        Self {
            kind: HttpErrorKind::Status(response),
            config: None,
        }
    }

    /// Attach the request configuration so the request can be resubmitted.
    pub fn with_config(mut self, config: RequestConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn response(&self) -> Option<&Response> {
        match &self.kind {
            HttpErrorKind::Status(r) => Some(r),
            HttpErrorKind::Other(_) | HttpErrorKind::Transport(_) => None,
        }
    }
}

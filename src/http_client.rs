//! Byte-level HTTP backend abstraction.
//!
//! The [`Transport`](crate::transport::Transport) speaks JSON; backends only
//! move bytes. Anything implementing [`HttpClient`] can carry the traffic, which
//! is how tests substitute canned responses.

use std::future::Future;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

use crate::error::HttpClientError;

/// A fully resolved request handed to a backend.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: String,
    /// Headers, authorization included.
    pub headers: HeaderMap,
    /// Encoded JSON body, if any.
    pub body: Option<Bytes>,
}

/// A raw response as returned by a backend.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Undecoded body.
    pub body: Bytes,
}

/// Pluggable HTTP backend.
///
/// Implementations must not retry and must not interpret the status code:
/// any response that arrives is returned as `Ok`.
pub trait HttpClient: Send + Sync {
    /// Send one request and wait for its response.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpClientError>> + Send;
}

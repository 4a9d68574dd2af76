//! Blocking backend built on `ureq`.
//!
//! `send` runs the whole exchange on the calling thread and only then yields a
//! ready future. Use it from scripts, CLIs or `current_thread` runtimes; inside
//! a multi-task executor prefer [`ReqwestClient`](super::ReqwestClient).

use std::io::{self, Read as _};
use std::time::Duration;

use bytes::Bytes;
use http::Request;
use tracing::debug;

use crate::error::HttpClientError;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};

/// [`HttpClient`] backed by a [`ureq::Agent`].
#[derive(Debug, Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a backend, optionally bounding every request by `timeout`.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap an existing agent.
    ///
    /// The agent must be configured with `http_status_as_error(false)`, or
    /// API error envelopes are lost to `ureq`'s own status errors.
    #[must_use]
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }

    fn run(&self, request: HttpRequest) -> Result<http::Response<ureq::Body>, HttpClientError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = Request::builder().method(method).uri(url);
        if let Some(map) = builder.headers_mut() {
            *map = headers;
        }

        // An empty Vec still sends `Content-Length: 0`, so body-less calls use `()`.
        let result = match body {
            Some(body) => {
                let request = builder.body(Vec::from(body)).map_err(invalid_request)?;
                self.agent.run(request)
            }
            None => {
                let request = builder.body(()).map_err(invalid_request)?;
                self.agent.run(request)
            }
        };
        result.map_err(map_ureq_error)
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HttpClient for UreqClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let response = self.run(request)?;
        debug!(status = response.status().as_u16(), "ureq exchange finished");

        let (parts, body) = response.into_parts();
        let mut buf = Vec::new();
        body.into_reader()
            .read_to_end(&mut buf)
            .map_err(map_io_error)?;

        Ok(HttpResponse {
            status: parts.status,
            headers: parts.headers,
            body: Bytes::from(buf),
        })
    }
}

fn invalid_request(err: http::Error) -> HttpClientError {
    HttpClientError::Other(Box::new(err))
}

fn map_ureq_error(err: ureq::Error) -> HttpClientError {
    match err {
        ureq::Error::Timeout(_) => HttpClientError::Timeout,
        ureq::Error::HostNotFound => HttpClientError::Connection("host not found".to_owned()),
        ureq::Error::Io(e) => map_io_error(e),
        other => HttpClientError::Other(Box::new(other)),
    }
}

fn map_io_error(err: io::Error) -> HttpClientError {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => HttpClientError::Timeout,
        _ => HttpClientError::Connection(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_map_to_timeout() {
        assert!(matches!(
            map_io_error(io::Error::new(io::ErrorKind::TimedOut, "slow")),
            HttpClientError::Timeout
        ));
    }

    #[test]
    fn unreachable_hosts_map_to_connection() {
        assert!(matches!(
            map_ureq_error(ureq::Error::HostNotFound),
            HttpClientError::Connection(_)
        ));
        assert!(matches!(
            map_ureq_error(ureq::Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "refused"
            ))),
            HttpClientError::Connection(_)
        ));
    }
}

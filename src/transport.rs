//! The request/response cycle shared by every resource client.
//!
//! A resource method describes its call as a [`RequestData`] (verb, URL
//! template, path and query parameters, JSON body) and hands it to
//! [`Transport::execute`], which resolves the URL against the configured base,
//! attaches authentication headers, sends it through the [`HttpClient`] backend
//! and decodes the reply.

use std::fmt;
use std::time::Instant;

use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, Error};
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};

const SDK_USER_AGENT: &str = concat!("MercadoPago Rust SDK/", env!("CARGO_PKG_VERSION"));
const SDK_TRACKING_ID: &str = concat!(
    "platform:rust,type:SDK",
    env!("CARGO_PKG_VERSION"),
    ",so;"
);

static X_TRACKING_ID: HeaderName = HeaderName::from_static("x-tracking-id");
static X_CORPORATION_ID: HeaderName = HeaderName::from_static("x-corporation-id");
static X_INTEGRATOR_ID: HeaderName = HeaderName::from_static("x-integrator-id");
static X_PLATFORM_ID: HeaderName = HeaderName::from_static("x-platform-id");

/// One API call, before URL resolution.
#[derive(Debug, Clone)]
pub struct RequestData<'a> {
    method: Method,
    template: &'a str,
    path_params: Vec<(&'a str, String)>,
    query: Vec<(String, String)>,
    body: Option<Bytes>,
}

impl<'a> RequestData<'a> {
    /// Describe a call to `template`, a path such as `/v1/payments/{id}`.
    #[must_use]
    pub fn new(method: Method, template: &'a str) -> Self {
        Self {
            method,
            template,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Shorthand for a `GET`.
    #[must_use]
    pub fn get(template: &'a str) -> Self {
        Self::new(Method::GET, template)
    }

    /// Shorthand for a `POST`.
    #[must_use]
    pub fn post(template: &'a str) -> Self {
        Self::new(Method::POST, template)
    }

    /// Shorthand for a `PUT`.
    #[must_use]
    pub fn put(template: &'a str) -> Self {
        Self::new(Method::PUT, template)
    }

    /// Shorthand for a `PATCH`.
    #[must_use]
    pub fn patch(template: &'a str) -> Self {
        Self::new(Method::PATCH, template)
    }

    /// Shorthand for a `DELETE`.
    #[must_use]
    pub fn delete(template: &'a str) -> Self {
        Self::new(Method::DELETE, template)
    }

    /// Bind the `{name}` placeholder.
    #[must_use]
    pub fn path_param(mut self, name: &'a str, value: impl fmt::Display) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Append one query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append several query parameters, keeping their order.
    #[must_use]
    pub fn query_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query.extend(pairs);
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        let encoded = serde_json::to_vec(body).map_err(Error::Serialize)?;
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }

    /// HTTP method of the call.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unresolved URL template.
    #[must_use]
    pub fn template(&self) -> &str {
        self.template
    }

    /// Encoded body, if one was set.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Resolve the template against `base`.
    ///
    /// Each path segment is percent-encoded after substitution, so parameter
    /// values cannot introduce extra segments. A placeholder without a bound
    /// value is an error, and so is a segment that renders to `.` or `..`,
    /// which URL normalization would drop or collapse.
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base.clone();
        url.set_query(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::InvalidUrl(format!("`{base}` cannot carry a path")))?;
            segments.pop_if_empty();
            for raw in self.template.split('/').filter(|s| !s.is_empty()) {
                segments.push(&self.render_segment(raw)?);
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }

    fn render_segment(&self, raw: &str) -> Result<String, Error> {
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                Error::InvalidUrl(format!("unterminated placeholder in `{}`", self.template))
            })?;
            let name = &after[..close];
            let value = self
                .path_params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
                .ok_or_else(|| {
                    Error::InvalidUrl(format!(
                        "unresolved path parameter `{name}` in `{}`",
                        self.template
                    ))
                })?;
            out.push_str(value);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        if out == "." || out == ".." {
            return Err(Error::InvalidUrl(format!(
                "path segment `{out}` in `{}` would be normalized away",
                self.template
            )));
        }
        Ok(out)
    }
}

/// Shared, stateless executor for API calls.
///
/// Holds the immutable [`Config`] and the backend. Safe to share across tasks;
/// each call builds its own request.
#[derive(Debug)]
pub struct Transport<C> {
    config: Config,
    http: C,
    default_headers: HeaderMap,
}

impl<C: HttpClient> Transport<C> {
    /// Bind a configuration to a backend.
    pub fn new(config: Config, http: C) -> Self {
        let default_headers = default_headers(&config);
        Self {
            config,
            http,
            default_headers,
        }
    }

    /// The configuration requests are authenticated with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The backend requests are sent through.
    pub fn http_client(&self) -> &C {
        &self.http
    }

    /// Perform one call and decode its 2xx body as `T`.
    #[instrument(
        name = "Transport::execute",
        skip_all,
        fields(method = %data.method, path = data.template)
    )]
    pub async fn execute<T: DeserializeOwned>(&self, data: RequestData<'_>) -> Result<T, Error> {
        let url = data.url(self.config.base_url())?;

        let mut headers = self.default_headers.clone();
        if data.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        debug!(resolved = url.path(), "sending request");
        let started = Instant::now();
        let response = self
            .http
            .send(HttpRequest {
                method: data.method,
                url: url.into(),
                headers,
                body: data.body,
            })
            .await?;
        debug!(
            status = response.status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "response received"
        );

        decode(response)
    }
}

fn default_headers(config: &Config) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, config.authorization().clone());
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));
    headers.insert(X_TRACKING_ID.clone(), HeaderValue::from_static(SDK_TRACKING_ID));

    for (name, value) in [
        (&X_CORPORATION_ID, config.corporation_id()),
        (&X_INTEGRATOR_ID, config.integrator_id()),
        (&X_PLATFORM_ID, config.platform_id()),
    ] {
        // Values were checked when the config was built.
        if let Some(Ok(value)) = value.map(HeaderValue::from_str) {
            headers.insert(name.clone(), value);
        }
    }
    headers
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, Error> {
    let HttpResponse {
        status,
        headers,
        body,
    } = response;

    if !status.is_success() {
        return Err(ApiError::from_parts(status, headers, &body).into());
    }

    let payload: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &body
    };
    serde_json::from_slice(payload).map_err(|source| Error::Decode { status, source })
}

//! Client configuration.
//!
//! A [`Config`] is built once, validated at construction, and shared read-only
//! by every resource client.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::error::ConfigError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.mercadopago.com";

/// Immutable settings used to authenticate and route every request.
#[derive(Debug, Clone)]
pub struct Config {
    access_token: Arc<SecretString>,
    authorization: HeaderValue,
    base_url: Url,
    timeout: Option<Duration>,
    corporation_id: Option<String>,
    integrator_id: Option<String>,
    platform_id: Option<String>,
}

impl Config {
    /// Build a configuration with default options.
    pub fn new(access_token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(access_token).build()
    }

    /// Start building a configuration.
    pub fn builder(access_token: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            access_token: SecretString::from(access_token.into()),
            base_url: None,
            timeout: None,
            corporation_id: None,
            integrator_id: None,
            platform_id: None,
        }
    }

    /// Build a configuration from externally loaded [`Settings`].
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder {
            access_token: settings.access_token,
            base_url: settings.base_url,
            timeout: settings.timeout_secs.map(Duration::from_secs),
            corporation_id: settings.corporation_id,
            integrator_id: settings.integrator_id,
            platform_id: settings.platform_id,
        };
        if builder.base_url.as_deref() == Some("") {
            builder.base_url = None;
        }
        builder.build()
    }

    /// The access token.
    #[must_use]
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// Pre-built `Bearer` header value, marked sensitive.
    pub(crate) fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }

    /// API root every URL template is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Corporation identifier sent as `X-Corporation-Id`.
    #[must_use]
    pub fn corporation_id(&self) -> Option<&str> {
        self.corporation_id.as_deref()
    }

    /// Integrator identifier sent as `X-Integrator-Id`.
    #[must_use]
    pub fn integrator_id(&self) -> Option<&str> {
        self.integrator_id.as_deref()
    }

    /// Platform identifier sent as `X-Platform-Id`.
    #[must_use]
    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }
}

/// Builder for [`Config`].
#[derive(Debug)]
pub struct ConfigBuilder {
    access_token: SecretString,
    base_url: Option<String>,
    timeout: Option<Duration>,
    corporation_id: Option<String>,
    integrator_id: Option<String>,
    platform_id: Option<String>,
}

impl ConfigBuilder {
    /// Override the API root (sandboxes, proxies, tests).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Apply a per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the corporation identifier.
    #[must_use]
    pub fn corporation_id(mut self, id: impl Into<String>) -> Self {
        self.corporation_id = Some(id.into());
        self
    }

    /// Set the integrator identifier.
    #[must_use]
    pub fn integrator_id(mut self, id: impl Into<String>) -> Self {
        self.integrator_id = Some(id.into());
        self
    }

    /// Set the platform identifier.
    #[must_use]
    pub fn platform_id(mut self, id: impl Into<String>) -> Self {
        self.platform_id = Some(id.into());
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let authorization = authorization_header(&self.access_token)?;
        let base_url = parse_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        for (name, value) in [
            ("x-corporation-id", &self.corporation_id),
            ("x-integrator-id", &self.integrator_id),
            ("x-platform-id", &self.platform_id),
        ] {
            if let Some(v) = value
                && HeaderValue::from_str(v).is_err()
            {
                return Err(ConfigError::InvalidHeader { name });
            }
        }

        Ok(Config {
            access_token: Arc::new(self.access_token),
            authorization,
            base_url,
            timeout: self.timeout,
            corporation_id: self.corporation_id,
            integrator_id: self.integrator_id,
            platform_id: self.platform_id,
        })
    }
}

fn authorization_header(token: &SecretString) -> Result<HeaderValue, ConfigError> {
    let token = token.expose_secret();
    if token.trim().is_empty() {
        return Err(ConfigError::InvalidCredential(
            "access token must not be empty".to_owned(),
        ));
    }
    if !token.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(ConfigError::InvalidCredential(
            "access token contains whitespace or non-printable characters".to_owned(),
        ));
    }

    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        ConfigError::InvalidCredential("access token is not a valid header value".to_owned())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: "expected an http(s) URL".to_owned(),
        });
    }
    Ok(url)
}

/// Configuration as loaded from a settings file or the environment by the
/// application.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Access token.
    #[serde(deserialize_with = "deserialize_secret")]
    pub access_token: SecretString,
    /// API root override.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Corporation identifier.
    #[serde(default)]
    pub corporation_id: Option<String>,
    /// Integrator identifier.
    #[serde(default)]
    pub integrator_id: Option<String>,
    /// Platform identifier.
    #[serde(default)]
    pub platform_id: Option<String>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

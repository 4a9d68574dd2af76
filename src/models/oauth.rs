//! OAuth models.

use serde::{Deserialize, Serialize};

/// Tokens issued by `POST /oauth/token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthCredential {
    /// Access token for the authorizing seller.
    pub access_token: String,
    /// Token type, normally `bearer`.
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    /// Granted scopes.
    pub scope: String,
    /// Seller's user identifier.
    pub user_id: i64,
    /// Token used to renew the credential.
    pub refresh_token: String,
    /// Seller's public key.
    pub public_key: String,
    /// Whether the credential belongs to production.
    pub live_mode: bool,
}

/// Grant requested from the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub(crate) enum TokenGrant<'a> {
    AuthorizationCode {
        client_secret: &'a str,
        code: &'a str,
        redirect_uri: &'a str,
    },
    RefreshToken {
        client_secret: &'a str,
        refresh_token: &'a str,
    },
}

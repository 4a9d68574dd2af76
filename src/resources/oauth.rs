//! OAuth credentials for acting on behalf of other sellers.
//!
//! The flow is: send the seller to [`authorization_url`], receive the
//! authorization `code` on the redirect URI, then exchange it with
//! [`OAuthApi::create`]. The integrator's own access token is sent as the
//! `client_secret`.

use std::future::Future;
use std::sync::Arc;

use secrecy::ExposeSecret as _;
use url::Url;

use crate::error::{Error, Result};
use crate::http_client::HttpClient;
use crate::models::{OAuthCredential, TokenGrant};
use crate::transport::{RequestData, Transport};

const URL_TOKEN: &str = "/oauth/token";
const URL_AUTHORIZATION: &str = "https://auth.mercadopago.com/authorization";

/// Build the page a seller visits to grant access. Performs no I/O.
pub fn authorization_url(client_id: &str, redirect_uri: &str, state: &str) -> Result<Url> {
    Url::parse_with_params(
        URL_AUTHORIZATION,
        [
            ("client_id", client_id),
            ("response_type", "code"),
            ("platform_id", "mp"),
            ("redirect_uri", redirect_uri),
            ("state", state),
        ],
    )
    .map_err(|e| Error::InvalidUrl(e.to_string()))
}

/// OAuth token operations.
pub trait OAuthApi: Send + Sync {
    /// Exchange an authorization code for a credential.
    fn create(
        &self,
        authorization_code: &str,
        redirect_uri: &str,
    ) -> impl Future<Output = Result<OAuthCredential>> + Send;

    /// Renew a credential before it expires.
    fn refresh(&self, refresh_token: &str) -> impl Future<Output = Result<OAuthCredential>> + Send;

    /// See [`authorization_url`].
    fn authorization_url(&self, client_id: &str, redirect_uri: &str, state: &str) -> Result<Url> {
        authorization_url(client_id, redirect_uri, state)
    }
}

/// [`OAuthApi`] over a shared [`Transport`].
pub struct OAuthClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> OAuthClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }

    async fn token(&self, grant: &TokenGrant<'_>) -> Result<OAuthCredential> {
        let data = RequestData::post(URL_TOKEN).json(grant)?;
        self.transport.execute(data).await
    }
}

impl<C> Clone for OAuthClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> OAuthApi for OAuthClient<C> {
    async fn create(
        &self,
        authorization_code: &str,
        redirect_uri: &str,
    ) -> Result<OAuthCredential> {
        let grant = TokenGrant::AuthorizationCode {
            client_secret: self.transport.config().access_token().expose_secret(),
            code: authorization_code,
            redirect_uri,
        };
        self.token(&grant).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<OAuthCredential> {
        let grant = TokenGrant::RefreshToken {
            client_secret: self.transport.config().access_token().expose_secret(),
            refresh_token,
        };
        self.token(&grant).await
    }
}

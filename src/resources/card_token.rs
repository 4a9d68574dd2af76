//! Card tokenization.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::{CardToken, CardTokenRequest};
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/v1/card_tokens";

/// Card tokenization.
pub trait CardTokenApi: Send + Sync {
    /// Exchange card data (or a saved card) for a single-use token.
    fn create(&self, request: &CardTokenRequest)
    -> impl Future<Output = Result<CardToken>> + Send;
}

/// [`CardTokenApi`] over a shared [`Transport`].
pub struct CardTokenClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> CardTokenClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for CardTokenClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> CardTokenApi for CardTokenClient<C> {
    async fn create(&self, request: &CardTokenRequest) -> Result<CardToken> {
        let data = RequestData::post(URL_BASE).json(request)?;
        self.transport.execute(data).await
    }
}

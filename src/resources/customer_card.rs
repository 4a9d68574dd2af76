//! Saved customer cards.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::{CustomerCard, CustomerCardRequest};
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/v1/customers/{customer_id}/cards";
const URL_WITH_ID: &str = "/v1/customers/{customer_id}/cards/{card_id}";

/// Operations on the cards saved on a customer.
pub trait CustomerCardApi: Send + Sync {
    /// Save a tokenized card on a customer.
    fn create(
        &self,
        customer_id: &str,
        request: &CustomerCardRequest,
    ) -> impl Future<Output = Result<CustomerCard>> + Send;

    /// Fetch one saved card.
    fn get(
        &self,
        customer_id: &str,
        card_id: &str,
    ) -> impl Future<Output = Result<CustomerCard>> + Send;

    /// Replace a saved card with a new token.
    fn update(
        &self,
        customer_id: &str,
        card_id: &str,
        request: &CustomerCardRequest,
    ) -> impl Future<Output = Result<CustomerCard>> + Send;

    /// Remove a saved card. Returns the removed card.
    fn delete(
        &self,
        customer_id: &str,
        card_id: &str,
    ) -> impl Future<Output = Result<CustomerCard>> + Send;

    /// All cards saved on a customer.
    fn list(&self, customer_id: &str) -> impl Future<Output = Result<Vec<CustomerCard>>> + Send;
}

/// [`CustomerCardApi`] over a shared [`Transport`].
pub struct CustomerCardClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> CustomerCardClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for CustomerCardClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> CustomerCardApi for CustomerCardClient<C> {
    async fn create(
        &self,
        customer_id: &str,
        request: &CustomerCardRequest,
    ) -> Result<CustomerCard> {
        let data = RequestData::post(URL_BASE)
            .path_param("customer_id", customer_id)
            .json(request)?;
        self.transport.execute(data).await
    }

    async fn get(&self, customer_id: &str, card_id: &str) -> Result<CustomerCard> {
        let data = RequestData::get(URL_WITH_ID)
            .path_param("customer_id", customer_id)
            .path_param("card_id", card_id);
        self.transport.execute(data).await
    }

    async fn update(
        &self,
        customer_id: &str,
        card_id: &str,
        request: &CustomerCardRequest,
    ) -> Result<CustomerCard> {
        let data = RequestData::put(URL_WITH_ID)
            .path_param("customer_id", customer_id)
            .path_param("card_id", card_id)
            .json(request)?;
        self.transport.execute(data).await
    }

    async fn delete(&self, customer_id: &str, card_id: &str) -> Result<CustomerCard> {
        let data = RequestData::delete(URL_WITH_ID)
            .path_param("customer_id", customer_id)
            .path_param("card_id", card_id);
        self.transport.execute(data).await
    }

    async fn list(&self, customer_id: &str) -> Result<Vec<CustomerCard>> {
        let data = RequestData::get(URL_BASE).path_param("customer_id", customer_id);
        self.transport.execute(data).await
    }
}

//! Merchant orders.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::{
    MerchantOrder, MerchantOrderRequest, MerchantOrderSearchRequest, MerchantOrderSearchResponse,
    MerchantOrderUpdateRequest,
};
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/merchant_orders";
const URL_SEARCH: &str = "/merchant_orders/search";
const URL_WITH_ID: &str = "/merchant_orders/{id}";

/// Operations on merchant orders.
pub trait MerchantOrderApi: Send + Sync {
    /// Create a merchant order.
    fn create(
        &self,
        request: &MerchantOrderRequest,
    ) -> impl Future<Output = Result<MerchantOrder>> + Send;

    /// Fetch one merchant order.
    fn get(&self, id: i64) -> impl Future<Output = Result<MerchantOrder>> + Send;

    /// Search merchant orders by field filters.
    fn search(
        &self,
        request: &MerchantOrderSearchRequest,
    ) -> impl Future<Output = Result<MerchantOrderSearchResponse>> + Send;

    /// Change the fields set in `request`.
    fn update(
        &self,
        id: i64,
        request: &MerchantOrderUpdateRequest,
    ) -> impl Future<Output = Result<MerchantOrder>> + Send;
}

/// [`MerchantOrderApi`] over a shared [`Transport`].
pub struct MerchantOrderClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> MerchantOrderClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for MerchantOrderClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> MerchantOrderApi for MerchantOrderClient<C> {
    async fn create(&self, request: &MerchantOrderRequest) -> Result<MerchantOrder> {
        let data = RequestData::post(URL_BASE).json(request)?;
        self.transport.execute(data).await
    }

    async fn get(&self, id: i64) -> Result<MerchantOrder> {
        let data = RequestData::get(URL_WITH_ID).path_param("id", id);
        self.transport.execute(data).await
    }

    async fn search(
        &self,
        request: &MerchantOrderSearchRequest,
    ) -> Result<MerchantOrderSearchResponse> {
        let data = RequestData::get(URL_SEARCH).query_pairs(request.params());
        self.transport.execute(data).await
    }

    async fn update(&self, id: i64, request: &MerchantOrderUpdateRequest) -> Result<MerchantOrder> {
        let data = RequestData::put(URL_WITH_ID)
            .path_param("id", id)
            .json(request)?;
        self.transport.execute(data).await
    }
}

//! Customer resource.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::{
    Customer, CustomerRequest, CustomerSearchRequest, CustomerSearchResponse,
    CustomerUpdateRequest,
};
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/v1/customers";
const URL_SEARCH: &str = "/v1/customers/search";
const URL_WITH_ID: &str = "/v1/customers/{id}";

/// Operations on customers.
pub trait CustomerApi: Send + Sync {
    /// Create a customer.
    fn create(&self, request: &CustomerRequest) -> impl Future<Output = Result<Customer>> + Send;

    /// Search customers by field filters.
    fn search(
        &self,
        request: &CustomerSearchRequest,
    ) -> impl Future<Output = Result<CustomerSearchResponse>> + Send;

    /// Fetch one customer.
    fn get(&self, id: &str) -> impl Future<Output = Result<Customer>> + Send;

    /// Change the fields set in `request`.
    fn update(
        &self,
        id: &str,
        request: &CustomerUpdateRequest,
    ) -> impl Future<Output = Result<Customer>> + Send;
}

/// [`CustomerApi`] over a shared [`Transport`].
pub struct CustomerClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> CustomerClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for CustomerClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> CustomerApi for CustomerClient<C> {
    async fn create(&self, request: &CustomerRequest) -> Result<Customer> {
        let data = RequestData::post(URL_BASE).json(request)?;
        self.transport.execute(data).await
    }

    async fn search(&self, request: &CustomerSearchRequest) -> Result<CustomerSearchResponse> {
        let data = RequestData::get(URL_SEARCH).query_pairs(request.params());
        self.transport.execute(data).await
    }

    async fn get(&self, id: &str) -> Result<Customer> {
        let data = RequestData::get(URL_WITH_ID).path_param("id", id);
        self.transport.execute(data).await
    }

    async fn update(&self, id: &str, request: &CustomerUpdateRequest) -> Result<Customer> {
        let data = RequestData::put(URL_WITH_ID)
            .path_param("id", id)
            .json(request)?;
        self.transport.execute(data).await
    }
}

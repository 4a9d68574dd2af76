//! Payment resource.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::{
    Payment, PaymentRequest, PaymentSearchRequest, PaymentSearchResponse, PaymentUpdate,
};
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/v1/payments";
const URL_SEARCH: &str = "/v1/payments/search";
const URL_WITH_ID: &str = "/v1/payments/{id}";

/// Operations on payments.
pub trait PaymentApi: Send + Sync {
    /// Create a payment.
    fn create(&self, request: &PaymentRequest) -> impl Future<Output = Result<Payment>> + Send;

    /// Search payments by field filters.
    fn search(
        &self,
        request: &PaymentSearchRequest,
    ) -> impl Future<Output = Result<PaymentSearchResponse>> + Send;

    /// Fetch one payment.
    fn get(&self, id: i64) -> impl Future<Output = Result<Payment>> + Send;

    /// Cancel a pending or authorized payment.
    fn cancel(&self, id: i64) -> impl Future<Output = Result<Payment>> + Send;

    /// Capture the full authorized amount.
    fn capture(&self, id: i64) -> impl Future<Output = Result<Payment>> + Send;

    /// Capture part of the authorized amount.
    fn capture_amount(&self, id: i64, amount: f64)
    -> impl Future<Output = Result<Payment>> + Send;
}

/// [`PaymentApi`] over a shared [`Transport`].
pub struct PaymentClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> PaymentClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }

    async fn put(&self, id: i64, body: &PaymentUpdate) -> Result<Payment> {
        let data = RequestData::put(URL_WITH_ID)
            .path_param("id", id)
            .json(body)?;
        self.transport.execute(data).await
    }
}

impl<C> Clone for PaymentClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> PaymentApi for PaymentClient<C> {
    async fn create(&self, request: &PaymentRequest) -> Result<Payment> {
        let data = RequestData::post(URL_BASE).json(request)?;
        self.transport.execute(data).await
    }

    async fn search(&self, request: &PaymentSearchRequest) -> Result<PaymentSearchResponse> {
        let data = RequestData::get(URL_SEARCH).query_pairs(request.params());
        self.transport.execute(data).await
    }

    async fn get(&self, id: i64) -> Result<Payment> {
        let data = RequestData::get(URL_WITH_ID).path_param("id", id);
        self.transport.execute(data).await
    }

    async fn cancel(&self, id: i64) -> Result<Payment> {
        let body = PaymentUpdate {
            status: Some("cancelled"),
            ..PaymentUpdate::default()
        };
        self.put(id, &body).await
    }

    async fn capture(&self, id: i64) -> Result<Payment> {
        let body = PaymentUpdate {
            capture: Some(true),
            ..PaymentUpdate::default()
        };
        self.put(id, &body).await
    }

    async fn capture_amount(&self, id: i64, amount: f64) -> Result<Payment> {
        let body = PaymentUpdate {
            capture: Some(true),
            transaction_amount: Some(amount),
            ..PaymentUpdate::default()
        };
        self.put(id, &body).await
    }
}

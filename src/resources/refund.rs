//! Payment refunds.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::{PartialRefundRequest, Refund};
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/v1/payments/{id}/refunds";
const URL_WITH_ID: &str = "/v1/payments/{id}/refunds/{refund_id}";

/// Operations on the refunds of a payment.
pub trait RefundApi: Send + Sync {
    /// Refund the whole payment.
    fn refund(&self, payment_id: i64) -> impl Future<Output = Result<Refund>> + Send;

    /// Refund `amount` of the payment.
    fn partial_refund(
        &self,
        amount: f64,
        payment_id: i64,
    ) -> impl Future<Output = Result<Refund>> + Send;

    /// Fetch one refund.
    fn get(&self, payment_id: i64, refund_id: i64) -> impl Future<Output = Result<Refund>> + Send;

    /// All refunds of a payment.
    fn list(&self, payment_id: i64) -> impl Future<Output = Result<Vec<Refund>>> + Send;
}

/// [`RefundApi`] over a shared [`Transport`].
pub struct RefundClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> RefundClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for RefundClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> RefundApi for RefundClient<C> {
    async fn refund(&self, payment_id: i64) -> Result<Refund> {
        let data = RequestData::post(URL_BASE).path_param("id", payment_id);
        self.transport.execute(data).await
    }

    async fn partial_refund(&self, amount: f64, payment_id: i64) -> Result<Refund> {
        let data = RequestData::post(URL_BASE)
            .path_param("id", payment_id)
            .json(&PartialRefundRequest { amount })?;
        self.transport.execute(data).await
    }

    async fn get(&self, payment_id: i64, refund_id: i64) -> Result<Refund> {
        let data = RequestData::get(URL_WITH_ID)
            .path_param("id", payment_id)
            .path_param("refund_id", refund_id);
        self.transport.execute(data).await
    }

    async fn list(&self, payment_id: i64) -> Result<Vec<Refund>> {
        let data = RequestData::get(URL_BASE).path_param("id", payment_id);
        self.transport.execute(data).await
    }
}

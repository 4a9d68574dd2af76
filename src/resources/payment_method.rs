//! Payment methods.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::PaymentMethod;
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/v1/payment_methods";

/// Payment methods available to the seller.
pub trait PaymentMethodApi: Send + Sync {
    /// All available payment methods.
    fn list(&self) -> impl Future<Output = Result<Vec<PaymentMethod>>> + Send;
}

/// [`PaymentMethodApi`] over a shared [`Transport`].
pub struct PaymentMethodClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> PaymentMethodClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for PaymentMethodClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> PaymentMethodApi for PaymentMethodClient<C> {
    async fn list(&self) -> Result<Vec<PaymentMethod>> {
        self.transport.execute(RequestData::get(URL_BASE)).await
    }
}

//! Identification document types.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::IdentificationType;
use crate::transport::{RequestData, Transport};

const URL_BASE: &str = "/v1/identification_types";

/// Document types accepted on the seller's site.
pub trait IdentificationTypeApi: Send + Sync {
    /// All accepted document types.
    fn list(&self) -> impl Future<Output = Result<Vec<IdentificationType>>> + Send;
}

/// [`IdentificationTypeApi`] over a shared [`Transport`].
pub struct IdentificationTypeClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> IdentificationTypeClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for IdentificationTypeClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> IdentificationTypeApi for IdentificationTypeClient<C> {
    async fn list(&self) -> Result<Vec<IdentificationType>> {
        self.transport.execute(RequestData::get(URL_BASE)).await
    }
}

//! The client facade.

use std::sync::Arc;

#[cfg(feature = "reqwest-client")]
use crate::backends::ReqwestClient;
use crate::config::Config;
use crate::http_client::HttpClient;
use crate::resources::{
    CardTokenClient, CustomerCardClient, CustomerClient, IdentificationTypeClient,
    MerchantOrderClient, OAuthClient, PaymentClient, PaymentMethodClient, PointClient,
    RefundClient, UserClient,
};
use crate::transport::Transport;

/// Entry point to every resource family.
///
/// Owns one [`Transport`] and hands out resource clients that share it.
/// Cloning is cheap.
pub struct MercadoPagoClient<C> {
    inner: Arc<Transport<C>>,
}

/// [`MercadoPagoClient`] over the bundled reqwest backend.
#[cfg(feature = "reqwest-client")]
pub type MercadoPago = MercadoPagoClient<ReqwestClient>;

#[cfg(feature = "reqwest-client")]
impl MercadoPagoClient<ReqwestClient> {
    /// Build a client using reqwest, honouring the configured timeout.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let http = ReqwestClient::new(config.timeout());
        Self::with_http_client(config, http)
    }
}

impl<C: HttpClient> MercadoPagoClient<C> {
    /// Build a client over a custom backend.
    pub fn with_http_client(config: Config, http: C) -> Self {
        Self {
            inner: Arc::new(Transport::new(config, http)),
        }
    }

    /// The configuration requests are authenticated with.
    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    /// The shared transport, for calls not covered by a resource client.
    pub fn transport(&self) -> &Arc<Transport<C>> {
        &self.inner
    }

    /// Customers.
    pub fn customers(&self) -> CustomerClient<C> {
        CustomerClient::new(Arc::clone(&self.inner))
    }

    /// Cards saved on customers.
    pub fn customer_cards(&self) -> CustomerCardClient<C> {
        CustomerCardClient::new(Arc::clone(&self.inner))
    }

    /// Card tokenization.
    pub fn card_tokens(&self) -> CardTokenClient<C> {
        CardTokenClient::new(Arc::clone(&self.inner))
    }

    /// Identification document types.
    pub fn identification_types(&self) -> IdentificationTypeClient<C> {
        IdentificationTypeClient::new(Arc::clone(&self.inner))
    }

    /// The authenticated user.
    pub fn users(&self) -> UserClient<C> {
        UserClient::new(Arc::clone(&self.inner))
    }

    /// Point devices and payment intents.
    pub fn point(&self) -> PointClient<C> {
        PointClient::new(Arc::clone(&self.inner))
    }

    /// Payments.
    pub fn payments(&self) -> PaymentClient<C> {
        PaymentClient::new(Arc::clone(&self.inner))
    }

    /// Refunds.
    pub fn refunds(&self) -> RefundClient<C> {
        RefundClient::new(Arc::clone(&self.inner))
    }

    /// OAuth credentials.
    pub fn oauth(&self) -> OAuthClient<C> {
        OAuthClient::new(Arc::clone(&self.inner))
    }

    /// Payment methods.
    pub fn payment_methods(&self) -> PaymentMethodClient<C> {
        PaymentMethodClient::new(Arc::clone(&self.inner))
    }

    /// Merchant orders.
    pub fn merchant_orders(&self) -> MerchantOrderClient<C> {
        MerchantOrderClient::new(Arc::clone(&self.inner))
    }
}

impl<C> Clone for MercadoPagoClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

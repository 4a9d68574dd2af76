//! Typed async client for the Mercado Pago REST API.
//!
//! Every API family (customers, payments, Point devices, OAuth, ...) is a
//! resource client handed out by [`MercadoPagoClient`]. Each call makes exactly
//! one HTTP request and returns the decoded response or an [`Error`]; nothing
//! is retried, cached or paginated behind your back.
//!
//! ```no_run
//! # async fn run() -> Result<(), mercadopago::Error> {
//! use mercadopago::{Config, MercadoPago, PaymentApi};
//!
//! let config = Config::new("APP_USR-...")?;
//! let client = MercadoPago::new(config);
//!
//! let payment = client.payments().get(5_466_310_457).await?;
//! println!("{} {}", payment.id, payment.status);
//! # Ok(())
//! # }
//! ```
//!
//! The HTTP stack is pluggable through [`HttpClient`]. The `reqwest-client`
//! feature (default) provides [`backends::ReqwestClient`]; `ureq-client`
//! provides a blocking [`backends::UreqClient`].

pub mod backends;
mod client;
pub mod config;
pub mod error;
mod http_client;
pub mod models;
mod resources;
pub mod transport;

#[cfg(feature = "reqwest-client")]
pub use client::MercadoPago;
pub use client::MercadoPagoClient;
pub use config::{Config, ConfigBuilder, DEFAULT_BASE_URL, Settings};
pub use error::{
    ApiError, ConfigError, Error, ErrorCause, ErrorEnvelope, HttpClientError, Result,
};
pub use http_client::{HttpClient, HttpRequest, HttpResponse};
pub use resources::{
    CardTokenApi, CardTokenClient, CustomerApi, CustomerCardApi, CustomerCardClient,
    CustomerClient, IdentificationTypeApi, IdentificationTypeClient, MerchantOrderApi,
    MerchantOrderClient, OAuthApi, OAuthClient, PaymentApi, PaymentClient, PaymentMethodApi,
    PaymentMethodClient, PointApi, PointClient, RefundApi, RefundClient, UserApi, UserClient,
    authorization_url,
};
pub use transport::{RequestData, Transport};

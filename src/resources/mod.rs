//! Resource clients, one per API family.
//!
//! Each family is a narrow capability trait (`CustomerApi`, `PaymentApi`, ...)
//! plus one client type implementing it over a shared
//! [`Transport`](crate::transport::Transport). Clients are cheap to clone and
//! can be handed to other tasks freely.

mod card_token;
mod customer;
mod customer_card;
mod identification_type;
mod merchant_order;
mod oauth;
mod payment;
mod payment_method;
mod point;
mod refund;
mod user;

pub use card_token::{CardTokenApi, CardTokenClient};
pub use customer::{CustomerApi, CustomerClient};
pub use customer_card::{CustomerCardApi, CustomerCardClient};
pub use identification_type::{IdentificationTypeApi, IdentificationTypeClient};
pub use merchant_order::{MerchantOrderApi, MerchantOrderClient};
pub use oauth::{OAuthApi, OAuthClient, authorization_url};
pub use payment::{PaymentApi, PaymentClient};
pub use payment_method::{PaymentMethodApi, PaymentMethodClient};
pub use point::{PointApi, PointClient};
pub use refund::{RefundApi, RefundClient};
pub use user::{UserApi, UserClient};

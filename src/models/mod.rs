//! Request and response records, one module per resource family.
//!
//! Request records omit unset optional fields when serialized. Response
//! records fill missing fields with defaults, so a sparse reply still decodes.

mod card_token;
mod common;
mod customer;
mod merchant_order;
mod oauth;
mod payment;
mod payment_method;
mod point;
mod refund;
mod user;

pub use card_token::{CardToken, CardTokenHolder, CardTokenRequest, IdentificationType};
pub use common::{Address, City, Identification, Metadata, Paging, Phone};
pub use customer::{
    CardPaymentMethod, Cardholder, Customer, CustomerCard, CustomerCardRequest, CustomerRequest,
    CustomerSearchRequest, CustomerSearchResponse, CustomerUpdateRequest, Issuer, SecurityCode,
};
pub use merchant_order::{
    MerchantOrder, MerchantOrderCollector, MerchantOrderItem, MerchantOrderPayer,
    MerchantOrderPayment, MerchantOrderRequest, MerchantOrderSearchRequest,
    MerchantOrderSearchResponse, MerchantOrderShipment, MerchantOrderUpdateRequest,
};
pub use oauth::OAuthCredential;
pub use payment::{
    AdditionalInfoRequest, FeeDetail, ItemRequest, Payer, PayerRequest, Payment, PaymentCard,
    PaymentRequest, PaymentSearchRequest, PaymentSearchResponse, TransactionDetails,
};
pub use payment_method::{
    BinSettings, CardNumberSettings, FinancialInstitution, PaymentMethod, PaymentMethodSettings,
    SecurityCodeSettings,
};
pub use point::{
    CancelPaymentIntent, Device, DevicesResponse, OperatingModeRequest, OperatingModeResponse,
    PaymentIntent, PaymentIntentAdditionalInfo, PaymentIntentPayment, PaymentIntentRequest,
};
pub use refund::{Refund, RefundSource};
pub use user::{User, UserStatus};

pub(crate) use oauth::TokenGrant;
pub(crate) use payment::PaymentUpdate;
pub(crate) use refund::PartialRefundRequest;

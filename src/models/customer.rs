//! Customer and customer-card models.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Address, Identification, Metadata, Paging, Phone, search_params};

/// Body of `POST /v1/customers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerRequest {
    /// Customer e-mail. Required by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Tax identification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
    /// Main address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Identifier of the default address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<String>,
    /// Identifier of the default card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_card: Option<String>,
    /// When the customer registered on the integrator's side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_registered: Option<DateTime<FixedOffset>>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body of `PUT /v1/customers/{id}`. Only the fields set are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerUpdateRequest {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Tax identification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
    /// Main address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Identifier of the default address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<String>,
    /// Identifier of the default card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_card: Option<String>,
    /// Registration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_registered: Option<DateTime<FixedOffset>>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Filters for `GET /v1/customers/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerSearchRequest {
    /// Page size.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
    /// Field filters, e.g. `email`.
    pub filters: BTreeMap<String, String>,
}

impl CustomerSearchRequest {
    /// Add a field filter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub(crate) fn params(&self) -> Vec<(String, String)> {
        search_params(self.limit, self.offset, &self.filters)
    }
}

/// A stored customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Customer identifier.
    pub id: String,
    /// E-mail.
    pub email: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Phone.
    pub phone: Phone,
    /// Tax identification.
    pub identification: Identification,
    /// Main address.
    pub address: Address,
    /// Registration date on the integrator's side.
    pub date_registered: Option<DateTime<FixedOffset>>,
    /// Free-form description.
    pub description: Option<String>,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last update date.
    pub date_last_updated: Option<DateTime<FixedOffset>>,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Identifier of the default card.
    pub default_card: Option<String>,
    /// Identifier of the default address.
    pub default_address: Option<String>,
    /// Saved cards.
    pub cards: Vec<CustomerCard>,
    /// Saved addresses.
    pub addresses: Vec<Address>,
    /// Whether the customer belongs to production.
    pub live_mode: bool,
    /// Owning user.
    pub user_id: Option<i64>,
    /// Owning merchant.
    pub merchant_id: Option<i64>,
    /// Creating application.
    pub client_id: Option<i64>,
    /// Status, e.g. `active`.
    pub status: Option<String>,
}

/// Result of a customer search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerSearchResponse {
    /// Paging information.
    pub paging: Paging,
    /// Matching customers.
    pub results: Vec<Customer>,
}

/// Body of `POST /v1/customers/{customer_id}/cards`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerCardRequest {
    /// Card token produced by a card-token call.
    pub token: String,
    /// Issuer, for methods where it cannot be inferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,
    /// Payment method, for methods where it cannot be inferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
}

/// A card saved on a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerCard {
    /// Card identifier.
    pub id: String,
    /// Owning customer.
    pub customer_id: String,
    /// Owning user.
    pub user_id: Option<String>,
    /// Expiration month.
    pub expiration_month: i32,
    /// Expiration year.
    pub expiration_year: i32,
    /// First six digits.
    pub first_six_digits: String,
    /// Last four digits.
    pub last_four_digits: String,
    /// Payment method.
    pub payment_method: CardPaymentMethod,
    /// Security code rules.
    pub security_code: SecurityCode,
    /// Issuer.
    pub issuer: Issuer,
    /// Cardholder.
    pub cardholder: Cardholder,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last update date.
    pub date_last_updated: Option<DateTime<FixedOffset>>,
    /// Whether the card belongs to production.
    pub live_mode: bool,
}

/// Payment method summary embedded in a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardPaymentMethod {
    /// Method identifier, e.g. `visa`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Method type, e.g. `credit_card`.
    pub payment_type_id: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// HTTPS thumbnail URL.
    pub secure_thumbnail: String,
}

/// Security code constraints of a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityCode {
    /// Code length.
    pub length: i32,
    /// Where the code is printed.
    pub card_location: String,
}

/// Card issuer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issuer {
    /// Issuer identifier.
    pub id: i64,
    /// Issuer name.
    pub name: String,
}

/// Cardholder details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cardholder {
    /// Name printed on the card.
    pub name: String,
    /// Holder identification.
    pub identification: Identification,
}

//! Card token and identification-type models.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::Identification;
use super::customer::Cardholder;

/// Body of `POST /v1/card_tokens`.
///
/// Either raw card data or a saved `card_id` (plus `security_code`) is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardTokenRequest {
    /// Saved card to tokenize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    /// Owning customer of a saved card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Full card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    /// Expiration month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    /// Expiration year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    /// Security code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    /// Cardholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<CardTokenHolder>,
}

/// Cardholder as sent when tokenizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardTokenHolder {
    /// Name printed on the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Holder identification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
}

/// A single-use card token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardToken {
    /// Token, passed as `token` when creating a payment.
    pub id: String,
    /// Saved card the token was made from.
    pub card_id: Option<String>,
    /// First six digits.
    pub first_six_digits: String,
    /// Last four digits.
    pub last_four_digits: String,
    /// Expiration month.
    pub expiration_month: i32,
    /// Expiration year.
    pub expiration_year: i32,
    /// Card number length.
    pub card_number_length: i32,
    /// Security code length.
    pub security_code_length: i32,
    /// Whether the card number passed the Luhn check.
    pub luhn_validation: bool,
    /// Token status, e.g. `active`.
    pub status: String,
    /// Cardholder.
    pub cardholder: Cardholder,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last update date.
    pub date_last_updated: Option<DateTime<FixedOffset>>,
    /// Expiry of the token itself.
    pub date_due: Option<DateTime<FixedOffset>>,
    /// Whether the token belongs to production.
    pub live_mode: bool,
}

/// A document type accepted by the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentificationType {
    /// Type identifier, e.g. `CPF`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Value type, e.g. `number`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Minimum length.
    pub min_length: i32,
    /// Maximum length.
    pub max_length: i32,
}

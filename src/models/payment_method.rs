//! Payment method models.

use serde::{Deserialize, Serialize};

/// A payment method available to the seller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethod {
    /// Method identifier, e.g. `visa`, `pix`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Method type, e.g. `credit_card`, `ticket`.
    pub payment_type_id: String,
    /// Availability, e.g. `active`.
    pub status: String,
    /// HTTPS thumbnail URL.
    pub secure_thumbnail: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Whether authorize-then-capture is supported.
    pub deferred_capture: String,
    /// Card number and security code rules.
    pub settings: Vec<PaymentMethodSettings>,
    /// Extra fields the method needs, e.g. `cardholder_name`.
    pub additional_info_needed: Vec<String>,
    /// Minimum amount.
    pub min_allowed_amount: f64,
    /// Maximum amount.
    pub max_allowed_amount: f64,
    /// Minutes until the payment is credited.
    pub accreditation_time: i64,
    /// Institutions that process the method.
    pub financial_institutions: Vec<FinancialInstitution>,
    /// Processing modes, e.g. `aggregator`.
    pub processing_modes: Vec<String>,
}

/// Validation rules of a card method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodSettings {
    /// BIN rules.
    pub bin: BinSettings,
    /// Card number rules.
    pub card_number: CardNumberSettings,
    /// Security code rules.
    pub security_code: SecurityCodeSettings,
}

/// BIN matching rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinSettings {
    /// BINs of the method.
    pub pattern: String,
    /// BINs allowing installments.
    pub installments_pattern: String,
    /// BINs excluded from the method.
    pub exclusion_pattern: Option<String>,
}

/// Card number rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardNumberSettings {
    /// Number length.
    pub length: i32,
    /// Validation algorithm, e.g. `standard`.
    pub validation: String,
}

/// Security code rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityCodeSettings {
    /// `mandatory` or `optional`.
    pub mode: String,
    /// Code length.
    pub length: i32,
    /// Where the code is printed.
    pub card_location: String,
}

/// An institution processing a method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialInstitution {
    /// Institution identifier.
    pub id: String,
    /// Institution name.
    pub description: String,
}

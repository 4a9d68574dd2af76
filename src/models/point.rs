//! Point (in-person terminal) models.

use serde::{Deserialize, Serialize};

use super::common::Paging;

/// Body of a payment-intent creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentIntentRequest {
    /// Amount in cents.
    pub amount: i64,
    /// Description shown on the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payment constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentIntentPayment>,
    /// Integrator-side references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<PaymentIntentAdditionalInfo>,
}

/// Payment constraints of an intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentIntentPayment {
    /// Payment identifier, once processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    /// Card type, e.g. `credit_card`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who bears the installment cost, e.g. `seller`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments_cost: Option<String>,
    /// Voucher type for benefit cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_type: Option<String>,
}

/// Integrator references attached to an intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentIntentAdditionalInfo {
    /// Integrator reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Whether the terminal prints a receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_on_terminal: Option<bool>,
    /// Ticket number printed on the receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
}

/// A payment intent queued on a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentIntent {
    /// Intent identifier.
    pub id: String,
    /// Device the intent was sent to.
    pub device_id: String,
    /// Amount in cents.
    pub amount: i64,
    /// Description.
    pub description: Option<String>,
    /// Intent state, e.g. `OPEN`, `FINISHED`.
    pub state: String,
    /// Payment constraints and result.
    pub payment: PaymentIntentPayment,
    /// Integrator references.
    pub additional_info: PaymentIntentAdditionalInfo,
}

/// Result of cancelling an intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelPaymentIntent {
    /// The cancelled intent.
    pub id: String,
}

/// A Point terminal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    /// Device identifier.
    pub id: String,
    /// Point-of-sale the device is bound to.
    pub pos_id: i64,
    /// Store the device is bound to.
    pub store_id: String,
    /// Integrator's point-of-sale reference.
    pub external_pos_id: String,
    /// Current mode: `PDV` or `STANDALONE`.
    pub operating_mode: String,
}

/// Device listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicesResponse {
    /// Devices.
    pub devices: Vec<Device>,
    /// Paging information.
    pub paging: Paging,
}

/// Body of an operating-mode change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingModeRequest {
    /// Target mode: `PDV` or `STANDALONE`.
    pub operating_mode: String,
}

/// Result of an operating-mode change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingModeResponse {
    /// Mode now in effect.
    pub operating_mode: String,
}

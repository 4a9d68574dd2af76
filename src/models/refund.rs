//! Refund models.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::Metadata;

/// A refund of a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Refund {
    /// Refund identifier.
    pub id: i64,
    /// Refunded payment.
    pub payment_id: i64,
    /// Refunded amount.
    pub amount: f64,
    /// Amount returned to the payer.
    pub amount_refunded_to_payer: Option<f64>,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Who issued the refund.
    pub source: RefundSource,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Acquirer sequence number.
    pub unique_sequence_number: Option<String>,
    /// Refund mode, e.g. `standard`.
    pub refund_mode: String,
    /// Adjustment amount.
    pub adjustment_amount: f64,
    /// Status, e.g. `approved`.
    pub status: String,
    /// Reason given for the refund.
    pub reason: Option<String>,
    /// Labels attached by the platform.
    pub labels: Vec<String>,
}

/// Origin of a [`Refund`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundSource {
    /// Issuer identifier.
    pub id: String,
    /// Issuer name.
    pub name: String,
    /// Issuer type, e.g. `collector`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of a partial refund.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct PartialRefundRequest {
    pub amount: f64,
}

//! Payment models.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Address, Identification, Metadata, Paging, Phone, search_params};
use super::refund::Refund;

/// Body of `POST /v1/payments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentRequest {
    /// Amount to charge.
    pub transaction_amount: f64,
    /// Payment method, e.g. `visa`, `pix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    /// Card token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    /// Card issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,
    /// Authorize only (`false`) or authorize and capture (`true`, API default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    /// Reject instead of leaving the payment pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_mode: Option<bool>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Integrator reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Webhook URL for this payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// Redirect URL for off-site methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Text on the card statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Expiration for cash and bank-transfer methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_expiration: Option<DateTime<FixedOffset>>,
    /// Payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<PayerRequest>,
    /// Fraud-prevention data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfoRequest>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Payer of a new payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PayerRequest {
    /// Payer type, e.g. `customer`, `guest`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Customer identifier, for saved customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// E-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Entity type, `individual` or `association`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Tax identification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
    /// Phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Fraud-prevention data sent with a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdditionalInfoRequest {
    /// Buyer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Purchased items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemRequest>,
}

/// A purchased item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemRequest {
    /// Item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Picture URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

/// Filters for `GET /v1/payments/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentSearchRequest {
    /// Page size.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
    /// Field filters, e.g. `external_reference`, `sort`, `criteria`.
    pub filters: BTreeMap<String, String>,
}

impl PaymentSearchRequest {
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

/// A payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    /// Payment identifier.
    pub id: i64,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Approval date.
    pub date_approved: Option<DateTime<FixedOffset>>,
    /// Last update date.
    pub date_last_updated: Option<DateTime<FixedOffset>>,
    /// Expiration date.
    pub date_of_expiration: Option<DateTime<FixedOffset>>,
    /// When the funds become available.
    pub money_release_date: Option<DateTime<FixedOffset>>,
    /// Operation type, e.g. `regular_payment`.
    pub operation_type: String,
    /// Issuer.
    pub issuer_id: Option<String>,
    /// Payment method, e.g. `visa`.
    pub payment_method_id: String,
    /// Payment type, e.g. `credit_card`.
    pub payment_type_id: String,
    /// Status, e.g. `approved`, `pending`, `cancelled`.
    pub status: String,
    /// Status detail, e.g. `accredited`.
    pub status_detail: String,
    /// Currency, e.g. `BRL`.
    pub currency_id: String,
    /// Description.
    pub description: Option<String>,
    /// Whether the payment belongs to production.
    pub live_mode: bool,
    /// Collecting user.
    pub collector_id: Option<i64>,
    /// Payer.
    pub payer: Payer,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Charged amount.
    pub transaction_amount: f64,
    /// Refunded amount.
    pub transaction_amount_refunded: f64,
    /// Discount applied by coupon.
    pub coupon_amount: f64,
    /// Number of installments.
    pub installments: i32,
    /// Amount breakdown.
    pub transaction_details: TransactionDetails,
    /// Fees charged.
    pub fee_details: Vec<FeeDetail>,
    /// Whether the payment was captured.
    pub captured: bool,
    /// Whether binary mode applies.
    pub binary_mode: bool,
    /// Integrator reference.
    pub external_reference: Option<String>,
    /// Text on the card statement.
    pub statement_descriptor: Option<String>,
    /// Webhook URL.
    pub notification_url: Option<String>,
    /// Refunds made against the payment.
    pub refunds: Vec<Refund>,
    /// Card used, when paid by card.
    pub card: Option<PaymentCard>,
    /// Channel data such as PIX QR codes.
    pub point_of_interaction: Option<serde_json::Value>,
}

/// Payer of a stored payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payer {
    /// Payer identifier.
    pub id: Option<String>,
    /// Payer type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// E-mail.
    pub email: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Entity type.
    pub entity_type: Option<String>,
    /// Tax identification.
    pub identification: Identification,
    /// Phone.
    pub phone: Phone,
}

/// Amount breakdown of a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDetails {
    /// Amount received after fees.
    pub net_received_amount: f64,
    /// Amount paid including fees.
    pub total_paid_amount: f64,
    /// Amount paid over the price.
    pub overpaid_amount: f64,
    /// Amount of each installment.
    pub installment_amount: f64,
    /// Voucher or bank slip URL.
    pub external_resource_url: Option<String>,
    /// Institution for bank transfers.
    pub financial_institution: Option<String>,
}

/// A fee charged on a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeDetail {
    /// Fee type, e.g. `mercadopago_fee`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Who bears the fee.
    pub fee_payer: String,
    /// Fee amount.
    pub amount: f64,
}

/// Card summary of a card payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCard {
    /// Saved card identifier.
    pub id: Option<String>,
    /// First six digits.
    pub first_six_digits: String,
    /// Last four digits.
    pub last_four_digits: String,
    /// Expiration month.
    pub expiration_month: i32,
    /// Expiration year.
    pub expiration_year: i32,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last update date.
    pub date_last_updated: Option<DateTime<FixedOffset>>,
}

/// Result of a payment search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSearchResponse {
    /// Paging information.
    pub paging: Paging,
    /// Matching payments.
    pub results: Vec<Payment>,
}

/// Body of the status-changing `PUT /v1/payments/{id}` calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_fields() {
        let req = PaymentRequest {
            transaction_amount: 105.1,
            payment_method_id: Some("visa".to_owned()),
            installments: Some(1),
            capture: Some(false),
            payer: Some(PayerRequest {
                email: Some("buyer@example.com".to_owned()),
                ..PayerRequest::default()
            }),
            ..PaymentRequest::default()
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "transaction_amount": 105.1,
                "payment_method_id": "visa",
                "installments": 1,
                "capture": false,
                "payer": {"email": "buyer@example.com"}
            })
        );
    }

    #[test]
    fn update_bodies() {
        let cancel = PaymentUpdate {
            status: Some("cancelled"),
            ..PaymentUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&cancel).unwrap(),
            r#"{"status":"cancelled"}"#
        );

        let capture = PaymentUpdate {
            capture: Some(true),
            transaction_amount: Some(50.0),
            ..PaymentUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&capture).unwrap(),
            r#"{"capture":true,"transaction_amount":50.0}"#
        );
    }

    #[test]
    fn payment_decodes_nested_blocks() {
        let payment: Payment = serde_json::from_str(
            r#"{
                "id": 5466310457,
                "status": "approved",
                "status_detail": "accredited",
                "transaction_amount": 105.1,
                "payer": {"id": "123", "type": "customer", "identification": {"type": "CPF", "number": "1"}},
                "fee_details": [{"type": "mercadopago_fee", "fee_payer": "collector", "amount": 4.2}],
                "refunds": [{"id": 1, "payment_id": 5466310457, "amount": 5.0}],
                "captured": true,
                "point_of_interaction": {"type": "PIX"}
            }"#,
        )
        .unwrap();

        assert_eq!(payment.id, 5_466_310_457);
        assert_eq!(payment.payer.kind.as_deref(), Some("customer"));
        assert_eq!(payment.fee_details[0].kind, "mercadopago_fee");
        assert_eq!(payment.refunds[0].payment_id, 5_466_310_457);
        assert!(payment.captured);
        assert!(payment.card.is_none());
    }
}

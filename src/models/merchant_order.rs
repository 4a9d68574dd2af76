//! Merchant order models.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::search_params;

/// Body of `POST /merchant_orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MerchantOrderRequest {
    /// Checkout preference the order belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_id: Option<String>,
    /// Application that created the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Site, e.g. `MLB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<MerchantOrderPayer>,
    /// Sponsor account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<i64>,
    /// Items sold.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MerchantOrderItem>,
    /// Webhook URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Integrator reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Marketplace name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
}

/// Body of `PUT /merchant_orders/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MerchantOrderUpdateRequest {
    /// Checkout preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_id: Option<String>,
    /// Application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<MerchantOrderPayer>,
    /// Sponsor account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<i64>,
    /// Items sold.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MerchantOrderItem>,
    /// Shipments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shipments: Vec<MerchantOrderShipment>,
    /// Webhook URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Integrator reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Marketplace name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
}

/// Filters for `GET /merchant_orders/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerchantOrderSearchRequest {
    /// Page size.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
    /// Field filters, e.g. `status`, `preference_id`.
    pub filters: BTreeMap<String, String>,
}

impl MerchantOrderSearchRequest {
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

/// A merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantOrder {
    /// Order identifier.
    pub id: i64,
    /// Checkout preference.
    pub preference_id: Option<String>,
    /// Application.
    pub application_id: Option<String>,
    /// Status, e.g. `opened`, `closed`.
    pub status: String,
    /// Payment status, e.g. `paid`, `payment_required`.
    pub order_status: Option<String>,
    /// Site.
    pub site_id: String,
    /// Buyer.
    pub payer: Option<MerchantOrderPayer>,
    /// Seller.
    pub collector: Option<MerchantOrderCollector>,
    /// Sponsor account.
    pub sponsor_id: Option<i64>,
    /// Payments made against the order.
    pub payments: Vec<MerchantOrderPayment>,
    /// Items sold.
    pub items: Vec<MerchantOrderItem>,
    /// Shipments.
    pub shipments: Vec<MerchantOrderShipment>,
    /// Webhook URL.
    pub notification_url: Option<String>,
    /// Free-form note.
    pub additional_info: Option<String>,
    /// Integrator reference.
    pub external_reference: Option<String>,
    /// Marketplace name.
    pub marketplace: Option<String>,
    /// Total of the items.
    pub total_amount: f64,
    /// Amount paid so far.
    pub paid_amount: f64,
    /// Amount refunded so far.
    pub refunded_amount: f64,
    /// Shipping cost.
    pub shipping_cost: f64,
    /// Whether the order was cancelled.
    pub cancelled: bool,
    /// Whether the order belongs to a test account.
    pub is_test: bool,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last update date.
    pub last_updated: Option<DateTime<FixedOffset>>,
}

/// Buyer of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantOrderPayer {
    /// Buyer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Buyer nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Seller of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantOrderCollector {
    /// Seller identifier.
    pub id: i64,
    /// Seller e-mail.
    pub email: Option<String>,
    /// Seller nickname.
    pub nickname: Option<String>,
}

/// An item of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantOrderItem {
    /// Item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Picture URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    /// Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Currency, e.g. `BRL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

/// A payment listed on a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantOrderPayment {
    /// Payment identifier.
    pub id: i64,
    /// Charged amount.
    pub transaction_amount: f64,
    /// Total paid including fees.
    pub total_paid_amount: f64,
    /// Shipping cost.
    pub shipping_cost: f64,
    /// Currency.
    pub currency_id: String,
    /// Status, e.g. `approved`.
    pub status: String,
    /// Status detail.
    pub status_detail: Option<String>,
    /// Operation type.
    pub operation_type: Option<String>,
    /// Approval date.
    pub date_approved: Option<DateTime<FixedOffset>>,
    /// Creation date.
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last modification date.
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// Refunded amount.
    pub amount_refunded: f64,
}

/// A shipment of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantOrderShipment {
    /// Shipment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Shipment type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    /// Shipping mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_mode: Option<String>,
    /// Status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Carrier service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
}

/// Result of a merchant order search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantOrderSearchResponse {
    /// Matching orders.
    pub elements: Vec<MerchantOrder>,
    /// Offset of the next page.
    pub next_offset: i64,
    /// Total number of matches.
    pub total: i64,
}

//! Sub-objects shared by several resources.

use serde::{Deserialize, Serialize};

/// Paging block returned by search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    /// Total number of matches.
    pub total: i64,
    /// Page size used.
    pub limit: i64,
    /// Offset of this page.
    pub offset: i64,
}

/// A person's or company's tax identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identification {
    /// Document type, e.g. `CPF`, `DNI`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Document number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// A phone number split the way the API expects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phone {
    /// Area code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// Local number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Address identifier, when stored on a customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<i64>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
}

/// City reference inside an [`Address`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Arbitrary key/value data attached to a resource.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Build query parameters from optional paging values and free-form filters.
pub(crate) fn search_params(
    limit: Option<u32>,
    offset: Option<u32>,
    filters: &std::collections::BTreeMap<String, String>,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = filters
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if let Some(limit) = limit {
        params.push(("limit".to_owned(), limit.to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset".to_owned(), offset.to_string()));
    }
    params
}

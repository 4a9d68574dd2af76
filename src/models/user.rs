//! User model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Identification, Phone};

/// The account the access token belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Public nickname.
    pub nickname: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// E-mail.
    pub email: String,
    /// Registration date.
    pub registration_date: Option<DateTime<FixedOffset>>,
    /// Country, e.g. `BR`.
    pub country_id: String,
    /// Site, e.g. `MLB`.
    pub site_id: String,
    /// Account type, e.g. `normal`.
    pub user_type: String,
    /// Public profile URL.
    pub permalink: String,
    /// Seller experience level.
    pub seller_experience: Option<String>,
    /// Tax identification.
    pub identification: Identification,
    /// Phone.
    pub phone: Phone,
    /// Account tags.
    pub tags: Vec<String>,
    /// Account status.
    pub status: UserStatus,
}

/// Status block of a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStatus {
    /// Site status, e.g. `active`.
    pub site_status: String,
}

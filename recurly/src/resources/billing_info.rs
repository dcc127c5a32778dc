use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::Element;
use crate::resource::Resource;

/// Payment details of an account, at `accounts/<code>/billing_info`.
///
/// Card numbers and verification values are write-only; the server returns
/// `first_six`, `last_four` and `card_type` instead.
///
/// ```rust,ignore
/// let account = client.find::<Account>("verena").await?;
/// let mut billing = Record::under(&account, BillingInfo {
///     number: Some("4111-1111-1111-1111".into()),
///     month: Some(12),
///     year: Some(2030),
///     ..Default::default()
/// })?;
/// client.save_strict(&mut billing).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Token from Recurly.js, used instead of raw card fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_six: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Element for BillingInfo {
    const NAME: &'static str = "billing_info";
}

impl Resource for BillingInfo {
    const COLLECTION: &'static str = "billing_info";
    const IDENTIFIER: &'static str = "";
    const READ_ONLY: &'static [&'static str] =
        &["card_type", "first_six", "last_four", "updated_at"];

    fn identifier(&self) -> Option<String> {
        None
    }
}

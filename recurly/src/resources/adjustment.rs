//! Charges and credits on an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{Element, List};
use crate::resource::Resource;

/// One tax applied to an adjustment. Only appears inside an adjustment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Jurisdiction kind (`state`, `county`, `city`, `special`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

impl Element for TaxDetail {
    const NAME: &'static str = "tax_detail";
}

/// A one-time charge or credit, identified by `uuid`.
///
/// Created under an account:
///
/// ```rust,ignore
/// let charge = Adjustment {
///     description: Some("Setup".into()),
///     unit_amount_in_cents: Some(5_00),
///     currency: Some("USD".into()),
///     ..Default::default()
/// };
/// let charge = client.create_child(&account, charge).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// `pending` or `invoiced`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_details: Option<List<TaxDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Element for Adjustment {
    const NAME: &'static str = "adjustment";
}

impl Resource for Adjustment {
    const COLLECTION: &'static str = "adjustments";
    const IDENTIFIER: &'static str = "uuid";
    const READ_ONLY: &'static [&'static str] = &[
        "state",
        "discount_in_cents",
        "tax_in_cents",
        "total_in_cents",
        "tax_details",
        "created_at",
    ];

    fn identifier(&self) -> Option<String> {
        self.uuid.clone()
    }
}

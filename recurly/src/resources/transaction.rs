use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Account;
use crate::format::Element;
use crate::resource::Resource;

/// A payment, refund or verification attempt, identified by `uuid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// `purchase`, `refund` or `verify`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// `success`, `failed` or `void`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voidable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refundable: Option<bool>,
    /// Account to charge, when creating a transaction directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Element for Transaction {
    const NAME: &'static str = "transaction";
}

impl Resource for Transaction {
    const COLLECTION: &'static str = "transactions";
    const IDENTIFIER: &'static str = "uuid";
    const READ_ONLY: &'static [&'static str] = &[
        "action",
        "status",
        "reference",
        "source",
        "recurring",
        "test",
        "voidable",
        "refundable",
        "created_at",
    ];

    fn identifier(&self) -> Option<String> {
        self.uuid.clone()
    }
}

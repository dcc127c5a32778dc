use serde::{Deserialize, Serialize};

use super::Money;
use crate::format::Element;
use crate::resource::Resource;

/// What an account owes, at `accounts/<code>/balance`. Read only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_due: Option<bool>,
    /// Outstanding balance per currency. Negative amounts are credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_in_cents: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_prepayment_balance_in_cents: Option<Money>,
}

impl Element for AccountBalance {
    const NAME: &'static str = "account_balance";
}

impl Resource for AccountBalance {
    const COLLECTION: &'static str = "balance";
    const IDENTIFIER: &'static str = "";
    const READ_ONLY: &'static [&'static str] = &[
        "past_due",
        "balance_in_cents",
        "processing_prepayment_balance_in_cents",
    ];

    fn identifier(&self) -> Option<String> {
        None
    }
}

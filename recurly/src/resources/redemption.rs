use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Account;
use crate::format::Element;
use crate::resource::{Resource, ResourcePath};

/// A coupon applied to an account, at `accounts/<code>/redemptions/<uuid>`.
///
/// Created by redeeming a coupon. Destroying a redemption removes the
/// coupon from the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Redemption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_use: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounted_in_cents: Option<i64>,
    /// `active` or `inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Redemption {
    fn account_path(&self) -> Option<ResourcePath> {
        self.account_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(Account::member_path)
    }
}

impl Element for Redemption {
    const NAME: &'static str = "redemption";
}

impl Resource for Redemption {
    const COLLECTION: &'static str = "redemptions";
    const IDENTIFIER: &'static str = "uuid";
    const READ_ONLY: &'static [&'static str] = &[
        "single_use",
        "total_discounted_in_cents",
        "state",
        "created_at",
        "updated_at",
    ];

    fn identifier(&self) -> Option<String> {
        self.uuid.clone()
    }

    fn path(&self) -> Option<ResourcePath> {
        let uuid = self.uuid.as_deref().filter(|u| !u.is_empty())?;
        Some(self.account_path()?.join(Self::COLLECTION).join(uuid))
    }

    fn collection_path(&self) -> ResourcePath {
        match self.account_path() {
            Some(account) => account.join(Self::COLLECTION),
            None => ResourcePath::new(Self::COLLECTION),
        }
    }
}

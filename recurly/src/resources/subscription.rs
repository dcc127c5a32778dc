//! Subscriptions and their lifecycle actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Account;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::format::Element;
use crate::method::RestMethod;
use crate::resource::{Record, Resource};

/// How much of the current period to refund on termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Refund {
    /// Refund the whole current period.
    Full,
    /// Refund the unused part of the current period.
    Partial,
    /// Refund nothing.
    #[strum(serialize = "none")]
    NoRefund,
}

/// A subscription of an account to a plan, identified by `uuid`.
///
/// New subscriptions embed the account (or just its code):
///
/// ```xml
/// <subscription>
///   <plan_code>gold</plan_code>
///   <currency>USD</currency>
///   <account><account_code>verena</account_code></account>
/// </subscription>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// `active`, `canceled`, `expired`, `future`, `in_trial`, `live` or `past_due`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_terms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_ends_at: Option<DateTime<Utc>>,
}

impl Element for Subscription {
    const NAME: &'static str = "subscription";
}

impl Resource for Subscription {
    const COLLECTION: &'static str = "subscriptions";
    const IDENTIFIER: &'static str = "uuid";
    const READ_ONLY: &'static [&'static str] = &[
        "state",
        "account",
        "activated_at",
        "canceled_at",
        "expires_at",
        "current_period_started_at",
        "current_period_ends_at",
    ];

    fn identifier(&self) -> Option<String> {
        self.uuid.clone()
    }
}

impl Record<Subscription> {
    /// Cancels at the end of the current period (`PUT subscriptions/<uuid>/cancel`).
    pub async fn cancel(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let path = self.location()?.join("cancel");
        client.act(self, RestMethod::Put, path, &[], None).await
    }

    /// Undoes a cancellation before the period ends.
    pub async fn reactivate(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let path = self.location()?.join("reactivate");
        client.act(self, RestMethod::Put, path, &[], None).await
    }

    /// Ends the subscription immediately, refunding per `refund`.
    pub async fn terminate(&mut self, client: &ApiClient, refund: Refund) -> Result<(), ApiError> {
        let path = self.location()?.join("terminate");
        let refund = refund.to_string();
        client
            .act(self, RestMethod::Put, path, &[("refund", refund.as_str())], None)
            .await
    }
}

//! Discount coupons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Money, Redemption};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::format::Element;
use crate::method::RestMethod;
use crate::request::PlanCodes;
use crate::resource::{HasMany, Record, Resource};

const STATE_REDEEMABLE: &str = "redeemable";

/// A coupon, identified by `coupon_code`.
///
/// Destroying a coupon expires it; `restore` makes an expired coupon
/// redeemable again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `redeemable`, `expired`, `maxed_out` or `inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_description: Option<String>,
    /// `percent`, `dollars` or `free_trial`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_in_cents: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeem_by_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_use: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_for_months: Option<u32>,
    /// `forever`, `single_use` or `temporal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redemptions_per_account: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_all_plans: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_non_plan_charges: Option<bool>,
    /// `account` or `subscription`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_resource: Option<String>,
    /// Plans the coupon is limited to when `applies_to_all_plans` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_codes: Option<PlanCodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Coupon {
    /// A new coupon with the given code.
    pub fn new(coupon_code: impl Into<String>) -> Self {
        Self {
            coupon_code: Some(coupon_code.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if the coupon can still be redeemed.
    pub fn is_redeemable(&self) -> bool {
        self.state.as_deref() == Some(STATE_REDEEMABLE)
    }
}

impl Element for Coupon {
    const NAME: &'static str = "coupon";
}

impl Resource for Coupon {
    const COLLECTION: &'static str = "coupons";
    const IDENTIFIER: &'static str = "coupon_code";
    const READ_ONLY: &'static [&'static str] = &["state", "created_at", "updated_at", "deleted_at"];

    fn identifier(&self) -> Option<String> {
        self.coupon_code.clone()
    }
}

impl HasMany<Redemption> for Coupon {}

impl Record<Coupon> {
    /// Redeems the coupon on an account (`POST coupons/<code>/redeem`).
    ///
    /// ## Errors
    ///
    /// A rejected redemption (coupon expired, account already redeemed it)
    /// is [`ApiError::Invalid`].
    pub async fn redeem(
        &self,
        client: &ApiClient,
        account_code: &str,
        currency: &str,
    ) -> Result<Record<Redemption>, ApiError> {
        let path = self.location()?.join("redeem");
        let request = Redemption {
            account_code: Some(account_code.to_string()),
            currency: Some(currency.to_string()),
            ..Redemption::default()
        };
        let body = client.format().encode(Redemption::NAME, &request)?;
        let url = client.url_for(&path)?;
        let response = client
            .send(RestMethod::Post, url, Redemption::NAME, Some(body))
            .await?;

        let mut redemption: Redemption = if response.is_empty() {
            request
        } else {
            client.format().decode(response.body())?
        };
        redemption
            .account_code
            .get_or_insert_with(|| account_code.to_string());
        let uri = redemption.path();
        Ok(Record::loaded(redemption, uri))
    }

    /// Restores an expired coupon (`PUT coupons/<code>/restore`).
    pub async fn restore(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let path = self.location()?.join("restore");
        client.act(self, RestMethod::Put, path, &[], None).await
    }
}

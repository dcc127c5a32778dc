//! Dunning campaigns: the retry and notification schedule for failed renewals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::format::{Element, List};
use crate::method::RestMethod;
use crate::request::{BulkUpdate, Request};
use crate::resource::{Record, Resource};

/// One customer email in a dunning cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DunningInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_template: Option<String>,
}

impl Element for DunningInterval {
    const NAME: &'static str = "interval";
}

/// The dunning rules for one kind of invoice. Only appears inside a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DunningCycle {
    /// `automatic`, `manual` or `trial`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cycle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_manual_trial: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_communication_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_immediately_on_hard_decline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervals: Option<List<DunningInterval>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_subscription: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_invoice: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_dunning_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_recycling_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Element for DunningCycle {
    const NAME: &'static str = "dunning_cycle";
}

/// A dunning campaign, identified by its server-assigned `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DunningCampaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether new plans use this campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dunning_cycles: Option<List<DunningCycle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Element for DunningCampaign {
    const NAME: &'static str = "dunning_campaign";
}

impl Resource for DunningCampaign {
    const COLLECTION: &'static str = "dunning_campaigns";
    const IDENTIFIER: &'static str = "id";
    const READ_ONLY: &'static [&'static str] = &["created_at", "updated_at", "deleted_at"];

    fn identifier(&self) -> Option<String> {
        self.id.clone()
    }
}

impl Record<DunningCampaign> {
    /// Assigns this campaign to every plan in `plan_codes`.
    ///
    /// Sends `PUT dunning_campaigns/<id>/bulk_update`. If the server answers
    /// with the campaign, the record is reloaded from it.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let mut campaign = client.find::<DunningCampaign>("abcdef1234567890").await?;
    /// campaign.bulk_update(&client, ["gold", "silver"]).await?;
    /// ```
    pub async fn bulk_update<I, S>(&mut self, client: &ApiClient, plan_codes: I) -> Result<(), ApiError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = self.location()?.join("bulk_update");
        let body = BulkUpdate::new(plan_codes).to_body(client.format())?;
        client
            .act(self, RestMethod::Put, path, &[], Some(body))
            .await
    }
}

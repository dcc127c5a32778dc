//! Plans and their add-ons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Money;
use crate::format::{Element, List};
use crate::request::Tier;
use crate::resource::{HasMany, Resource, ResourcePath};

/// A subscription plan, identified by `plan_code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee_accounting_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_in_cents: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee_in_cents: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_interval_length: Option<u32>,
    /// `days` or `months`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_interval_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_interval_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_interval_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_billing_cycles: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    /// `never`, `evenly`, `at_range_start` or `at_range_end`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_schedule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee_revenue_schedule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avalara_transaction_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avalara_service_type: Option<i64>,
    /// Campaign used when a renewal fails. Assigned with a dunning
    /// campaign's bulk update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dunning_campaign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Plan {
    /// A new plan with the given code.
    pub fn new(plan_code: impl Into<String>) -> Self {
        Self {
            plan_code: Some(plan_code.into()),
            ..Self::default()
        }
    }
}

impl Element for Plan {
    const NAME: &'static str = "plan";
}

impl Resource for Plan {
    const COLLECTION: &'static str = "plans";
    const IDENTIFIER: &'static str = "plan_code";
    const READ_ONLY: &'static [&'static str] = &["created_at", "updated_at"];

    fn identifier(&self) -> Option<String> {
        self.plan_code.clone()
    }
}

impl HasMany<AddOn> for Plan {}

/// An add-on of a plan, at `plans/<plan_code>/add_ons/<add_on_code>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Owning plan. Only used to build paths; never sent.
    #[serde(default, skip_serializing)]
    pub plan_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_in_cents: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_quantity_on_hosted_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_code: Option<String>,
    /// `fixed`, `tiered`, `stairstep` or `volume`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<List<Tier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AddOn {
    /// A new add-on of `plan_code`.
    pub fn new(plan_code: impl Into<String>, add_on_code: impl Into<String>) -> Self {
        Self {
            plan_code: Some(plan_code.into()),
            add_on_code: Some(add_on_code.into()),
            ..Self::default()
        }
    }

    fn plan_path(&self) -> Option<ResourcePath> {
        self.plan_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(Plan::member_path)
    }
}

impl Element for AddOn {
    const NAME: &'static str = "add_on";
}

impl Resource for AddOn {
    const COLLECTION: &'static str = "add_ons";
    const IDENTIFIER: &'static str = "add_on_code";
    const READ_ONLY: &'static [&'static str] = &["created_at"];

    fn identifier(&self) -> Option<String> {
        self.add_on_code.clone()
    }

    fn path(&self) -> Option<ResourcePath> {
        let code = self.add_on_code.as_deref().filter(|c| !c.is_empty())?;
        Some(self.plan_path()?.join(Self::COLLECTION).join(code))
    }

    fn collection_path(&self) -> ResourcePath {
        match self.plan_path() {
            Some(plan) => plan.join(Self::COLLECTION),
            None => ResourcePath::new(Self::COLLECTION),
        }
    }
}

//! Outbound-only payloads.
//!
//! A request has a fixed set of fields and no identity: it is never fetched,
//! only serialized into the body of an action such as a dunning campaign's
//! bulk update, or nested inside a resource (add-on tiers).

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::format::{Element, List, WireFormat};

/// A payload with a fixed schema.
pub trait Request: Element + Serialize {
    /// Encodes the payload with [`Element::NAME`] as its root element.
    fn to_body(&self, format: WireFormat) -> Result<String, FormatError> {
        format.encode(Self::NAME, self)
    }
}

/// The plan codes of a bulk update, `<plan_codes><plan_code>..</plan_code></plan_codes>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCodes {
    #[serde(rename = "plan_code", default)]
    codes: Vec<String>,
}

impl PlanCodes {
    /// Wraps the given codes.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// The codes in order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

impl Element for PlanCodes {
    const NAME: &'static str = "plan_codes";
}

impl Request for PlanCodes {}

/// Assigns a dunning campaign to many plans at once.
///
/// ## Examples
///
/// ```rust
/// use recurly::format::WireFormat;
/// use recurly::request::{BulkUpdate, Request};
///
/// let body = BulkUpdate::new(["gold", "silver"]).to_body(WireFormat::Xml).unwrap();
/// assert_eq!(
///     body,
///     "<dunning_campaign><plan_codes><plan_code>gold</plan_code>\
///      <plan_code>silver</plan_code></plan_codes></dunning_campaign>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpdate {
    /// Plans to assign.
    pub plan_codes: PlanCodes,
}

impl BulkUpdate {
    /// A bulk update for `plan_codes`.
    pub fn new<I, S>(plan_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plan_codes: PlanCodes::new(plan_codes),
        }
    }
}

impl Element for BulkUpdate {
    const NAME: &'static str = "dunning_campaign";
}

impl Request for BulkUpdate {}

/// Price of one tier in one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierPricing {
    /// 3-letter ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<f64>,
    /// Unit price as a decimal string, for sub-cent precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<String>,
}

impl Element for TierPricing {
    const NAME: &'static str = "tier_pricing";
}

impl Request for TierPricing {}

/// A quantity tier of a tiered add-on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Pricing per currency.
    #[serde(default, skip_serializing_if = "List::is_empty")]
    pub currencies: List<TierPricing>,
    /// Ending quantity for the tier. Unit-priced add-ons count units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_quantity: Option<i64>,
}

impl Element for Tier {
    const NAME: &'static str = "tier";
}

impl Request for Tier {}

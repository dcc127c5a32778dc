//! Concrete v2 resources.
//!
//! | Resource | Path | Identifier |
//! |---|---|---|
//! | [`Account`] | `accounts/<code>` | `account_code` |
//! | [`BillingInfo`] | `accounts/<code>/billing_info` | none |
//! | [`AccountBalance`] | `accounts/<code>/balance` | none |
//! | [`Redemption`] | `accounts/<code>/redemptions/<uuid>` | `uuid` |
//! | [`Coupon`] | `coupons/<code>` | `coupon_code` |
//! | [`Subscription`] | `subscriptions/<uuid>` | `uuid` |
//! | [`Invoice`] | `invoices/<number>` | `invoice_number` |
//! | [`Adjustment`] | `adjustments/<uuid>` | `uuid` |
//! | [`Transaction`] | `transactions/<uuid>` | `uuid` |
//! | [`Note`] | `accounts/<code>/notes` | none |
//! | [`Plan`] | `plans/<code>` | `plan_code` |
//! | [`AddOn`] | `plans/<code>/add_ons/<code>` | `add_on_code` |
//! | [`DunningCampaign`] | `dunning_campaigns/<id>` | `id` |
//!
//! [`Address`], [`TaxDetail`], [`DunningCycle`] and [`DunningInterval`] are
//! embedded in other resources and have no endpoint of their own.

mod account;
mod account_balance;
mod address;
mod adjustment;
mod billing_info;
mod coupon;
mod dunning_campaign;
mod invoice;
mod money;
mod note;
mod plan;
mod redemption;
mod subscription;
mod transaction;

pub use account::Account;
pub use account_balance::AccountBalance;
pub use address::Address;
pub use adjustment::{Adjustment, TaxDetail};
pub use billing_info::BillingInfo;
pub use coupon::Coupon;
pub use dunning_campaign::{DunningCampaign, DunningCycle, DunningInterval};
pub use invoice::Invoice;
pub use money::Money;
pub use note::Note;
pub use plan::{AddOn, Plan};
pub use redemption::Redemption;
pub use subscription::{Refund, Subscription};
pub use transaction::Transaction;

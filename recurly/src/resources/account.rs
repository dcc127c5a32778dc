//! Customer accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AccountBalance, Address, Adjustment, BillingInfo, Invoice, Note, Redemption, Subscription,
    Transaction,
};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::format::Element;
use crate::method::RestMethod;
use crate::resource::{HasMany, HasOne, Record, Resource};

const STATE_ACTIVE: &str = "active";
const STATE_CLOSED: &str = "closed";

/// A customer, identified by the merchant-chosen `account_code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_code: Option<String>,
    /// `active` or `closed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Token for the hosted account management pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_login_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Account {
    /// A new account with the given code.
    pub fn new(account_code: impl Into<String>) -> Self {
        Self {
            account_code: Some(account_code.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if the account has been closed.
    pub fn is_closed(&self) -> bool {
        self.state.as_deref() == Some(STATE_CLOSED)
    }
}

impl Element for Account {
    const NAME: &'static str = "account";
}

impl Resource for Account {
    const COLLECTION: &'static str = "accounts";
    const IDENTIFIER: &'static str = "account_code";
    const READ_ONLY: &'static [&'static str] = &[
        "state",
        "hosted_login_token",
        "balance_in_cents",
        "created_at",
        "updated_at",
        "closed_at",
    ];

    fn identifier(&self) -> Option<String> {
        self.account_code.clone()
    }
}

impl HasMany<Adjustment> for Account {}
impl HasMany<Invoice> for Account {}
impl HasMany<Subscription> for Account {}
impl HasMany<Transaction> for Account {}
impl HasMany<Note> for Account {}
impl HasMany<Redemption> for Account {}
impl HasOne<BillingInfo> for Account {}
impl HasOne<AccountBalance> for Account {}

impl Record<Account> {
    /// Closes the account (`DELETE accounts/<code>`).
    ///
    /// Closing cancels active subscriptions and removes billing info. The
    /// account stays readable and can be reopened.
    pub async fn close(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let path = self.location()?;
        client
            .act(self, RestMethod::Delete, path, &[], None)
            .await?;
        let mut closed = self.attributes().clone();
        closed.state = Some(STATE_CLOSED.to_string());
        self.replace(closed, None);
        Ok(())
    }

    /// Reopens a closed account (`PUT accounts/<code>/reopen`).
    pub async fn reopen(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let path = self.location()?.join("reopen");
        client.act(self, RestMethod::Put, path, &[], None).await?;
        if self.is_closed() {
            let mut reopened = self.attributes().clone();
            reopened.state = Some(STATE_ACTIVE.to_string());
            self.replace(reopened, None);
        }
        Ok(())
    }
}

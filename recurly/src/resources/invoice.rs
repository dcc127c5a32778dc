//! Invoices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Adjustment, Transaction};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::format::{Element, List};
use crate::method::RestMethod;
use crate::resource::{HasMany, Record, Resource};

/// An invoice, identified by its sequential `invoice_number`.
///
/// Invoices are created by posting to an account
/// (`client.create_child(&account, Invoice::default())`), which invoices
/// all of the account's pending adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// `pending`, `paid`, `failed` or `past_due`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_terms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<List<Adjustment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Element for Invoice {
    const NAME: &'static str = "invoice";
}

impl Resource for Invoice {
    const COLLECTION: &'static str = "invoices";
    const IDENTIFIER: &'static str = "invoice_number";
    const READ_ONLY: &'static [&'static str] = &[
        "uuid",
        "state",
        "currency",
        "subtotal_in_cents",
        "tax_in_cents",
        "total_in_cents",
        "line_items",
        "created_at",
        "closed_at",
    ];

    fn identifier(&self) -> Option<String> {
        self.invoice_number.map(|n| n.to_string())
    }
}

impl HasMany<Transaction> for Invoice {}

impl Record<Invoice> {
    /// Marks an offline invoice as paid (`PUT invoices/<number>/mark_successful`).
    pub async fn mark_successful(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let path = self.location()?.join("mark_successful");
        client.act(self, RestMethod::Put, path, &[], None).await
    }

    /// Marks an invoice as failed collection (`PUT invoices/<number>/mark_failed`).
    pub async fn mark_failed(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let path = self.location()?.join("mark_failed");
        client.act(self, RestMethod::Put, path, &[], None).await
    }
}

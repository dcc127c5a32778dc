//! Typed async client for the Recurly v2 subscription billing API.
//!
//! The `recurly` crate maps each v2 resource (accounts, subscriptions,
//! invoices, plans, coupons, dunning campaigns, ...) onto a plain struct and sends
//! the HTTP calls needed to create, fetch, update and delete them.
//!
//! ## Features
//!
//! - **Typed resources**: one struct per resource, wrapped in a
//!   change-tracking [`Record`] so updates only send modified attributes
//! - **XML or JSON**: XML by default, JSON with the same element tree
//! - **Scoped configuration**: process defaults plus per-thread overrides,
//!   snapshotted when a client is built
//! - **Layered error handling**: validation failures carry per-field messages
//! - **Tracing**: every request runs in an `api_request` span; bodies are only
//!   logged when explicitly unlocked
//!
//! ## Example
//!
//! ```rust,ignore
//! use recurly::{ApiClient, Config};
//! use recurly::resources::Account;
//!
//! let client = ApiClient::new(Config::new("my-private-key"))?;
//!
//! let mut account = client
//!     .create(Account {
//!         email: Some("verena@example.com".into()),
//!         ..Account::new("verena")
//!     })
//!     .await?;
//! if !account.is_valid() {
//!     eprintln!("rejected: {}", account.errors());
//! }
//!
//! account.company_name = Some("Acme".into());
//! client.save_strict(&mut account).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod method;
pub mod request;
pub mod resource;
pub mod resources;

// Re-exports for convenience
pub use client::{ApiClient, ApiClientBuilder};
pub use config::{Config, Settings};
pub use error::{ApiError, AuthError, ClientError, ConfigError, FieldError, FieldErrors, FormatError};
pub use format::WireFormat;
pub use method::RestMethod;
pub use request::Request;
pub use resource::{ListParams, Page, Record, Resource, ResourcePath};

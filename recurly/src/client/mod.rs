//! HTTP client module.
//!
//! [`ApiClient`] sends requests to the v2 API and maps responses onto
//! [`Record`](crate::resource::Record)s. The generic resource operations
//! (find, create, save, reload, destroy, list and relation fetches) live in
//! [`crud`]; resource-specific actions are defined next to each resource.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use recurly::config::{self, Settings};
//! use recurly::resources::Account;
//! use recurly::ApiClient;
//!
//! config::set_api_key("my-private-key");
//! config::set_subdomain("acme");
//!
//! let client = ApiClient::from_config()?;
//! let mut account = client.find::<Account>("verena").await?;
//! account.company_name = Some("Acme".into());
//! client.save_strict(&mut account).await?;
//! ```

pub mod crud;
mod executor;

pub use executor::{API_VERSION, ApiClient, ApiClientBuilder};
pub(crate) use executor::Response;

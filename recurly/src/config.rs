//! Process-wide defaults and per-thread overrides.
//!
//! Settings resolve in this order: the calling thread's override, then the
//! process default, then the built-in fallback (`"api"` for the subdomain,
//! `"USD"` for the currency; the API key has none).
//!
//! Clients take a [`Config`] snapshot when they are built, so a request in
//! flight never looks at thread state again.
//!
//! ## Examples
//!
//! ```rust
//! use recurly::config::{self, Settings};
//!
//! config::set_api_key("process-key");
//!
//! {
//!     let _guard = config::scoped(Settings::new().api_key("tenant-key").subdomain("tenant"));
//!     assert_eq!(config::api_key().unwrap(), "tenant-key");
//!     assert_eq!(config::subdomain(), "tenant");
//! }
//!
//! assert_eq!(config::api_key().unwrap(), "process-key");
//! ```

use std::cell::RefCell;
use std::sync::{PoisonError, RwLock};

use crate::error::ConfigError;

const DEFAULT_SUBDOMAIN: &str = "api";
const DEFAULT_CURRENCY: &str = "USD";

/// A partial set of configuration values.
///
/// Used both for the process defaults and for thread overrides; unset
/// fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Site subdomain (`<subdomain>.recurly.com`).
    pub subdomain: Option<String>,
    /// Private API key.
    pub api_key: Option<String>,
    /// Currency used for single-amount money values.
    pub default_currency: Option<String>,
}

impl Settings {
    /// Empty settings.
    pub const fn new() -> Self {
        Self {
            subdomain: None,
            api_key: None,
            default_currency: None,
        }
    }

    /// Sets the subdomain.
    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the default currency.
    pub fn default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = Some(currency.into());
        self
    }
}

static DEFAULTS: RwLock<Settings> = RwLock::new(Settings::new());

thread_local! {
    static THREAD_OVERRIDE: RefCell<Option<Settings>> = const { RefCell::new(None) };
}

fn resolve(pick: impl Fn(&Settings) -> Option<String>) -> Option<String> {
    let local = THREAD_OVERRIDE.with(|cell| cell.borrow().as_ref().and_then(&pick));
    local.or_else(|| {
        let defaults = DEFAULTS.read().unwrap_or_else(PoisonError::into_inner);
        pick(&defaults)
    })
}

fn update_defaults(apply: impl FnOnce(&mut Settings)) {
    let mut defaults = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
    apply(&mut defaults);
}

/// Sets the process-wide subdomain.
pub fn set_subdomain(subdomain: impl Into<String>) {
    let subdomain = subdomain.into();
    update_defaults(|d| d.subdomain = Some(subdomain));
}

/// Sets the process-wide API key.
pub fn set_api_key(api_key: impl Into<String>) {
    let api_key = api_key.into();
    update_defaults(|d| d.api_key = Some(api_key));
}

/// Sets the process-wide default currency.
pub fn set_default_currency(currency: impl Into<String>) {
    let currency = currency.into();
    update_defaults(|d| d.default_currency = Some(currency));
}

/// Clears every process-wide default.
pub fn reset_defaults() {
    update_defaults(|d| *d = Settings::new());
}

/// Installs (`Some`) or clears (`None`) the calling thread's override.
pub fn config(overrides: Option<Settings>) {
    THREAD_OVERRIDE.with(|cell| *cell.borrow_mut() = overrides);
}

/// Installs a thread override until the returned guard is dropped, then
/// restores whatever override was active before.
#[must_use = "the override is removed as soon as the guard is dropped"]
pub fn scoped(overrides: Settings) -> ScopedConfig {
    let previous = THREAD_OVERRIDE.with(|cell| cell.borrow_mut().replace(overrides));
    ScopedConfig { previous }
}

/// Guard returned by [`scoped`].
#[derive(Debug)]
pub struct ScopedConfig {
    previous: Option<Settings>,
}

impl Drop for ScopedConfig {
    fn drop(&mut self) {
        let previous = self.previous.take();
        THREAD_OVERRIDE.with(|cell| *cell.borrow_mut() = previous);
    }
}

/// The subdomain for the calling thread.
pub fn subdomain() -> String {
    resolve(|s| s.subdomain.clone()).unwrap_or_else(|| DEFAULT_SUBDOMAIN.to_string())
}

/// The API key for the calling thread.
///
/// ## Errors
///
/// Returns [`ConfigError::MissingApiKey`] when no layer provides one.
pub fn api_key() -> Result<String, ConfigError> {
    resolve(|s| s.api_key.clone()).ok_or(ConfigError::MissingApiKey)
}

/// The default currency for the calling thread.
pub fn default_currency() -> String {
    resolve(|s| s.default_currency.clone()).unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Fully resolved configuration carried by an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site subdomain.
    pub subdomain: String,
    /// Private API key.
    pub api_key: String,
    /// Currency used for single-amount money values.
    pub default_currency: String,
}

impl Config {
    /// Creates a configuration with the fallback subdomain and currency.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            subdomain: DEFAULT_SUBDOMAIN.to_string(),
            api_key: api_key.into(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Snapshots the values visible to the calling thread.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no API key is configured.
    pub fn current() -> Result<Self, ConfigError> {
        Ok(Self {
            subdomain: subdomain(),
            api_key: api_key()?,
            default_currency: default_currency(),
        })
    }

    /// `https://<subdomain>.recurly.com/v2/`
    pub fn base_url(&self) -> Result<url::Url, ConfigError> {
        let url = url::Url::parse(&format!("https://{}.recurly.com/v2/", self.subdomain))?;
        Ok(url)
    }
}

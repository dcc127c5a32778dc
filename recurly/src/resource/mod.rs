//! Resource model: typed resources and their persisted records.
//!
//! Every API resource is a plain struct implementing [`Resource`]. A
//! [`Record`] wraps one with what the client needs to keep it in sync with
//! the server: the path it was loaded from, whether it exists remotely, a
//! snapshot of its attributes at load time (so only changed attributes are
//! sent on update), and the field errors of the last failed save.

mod page;
mod path;
mod record;

pub use page::{ListParams, Page, SortOrder};
pub(crate) use page::next_link;
pub use path::ResourcePath;
pub use record::Record;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::format::Element;

/// A server-side billing entity reachable through CRUD endpoints.
///
/// ## Examples
///
/// ```rust
/// use recurly::format::Element;
/// use recurly::resource::{Resource, ResourcePath};
///
/// #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
/// struct Coupon {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     coupon_code: Option<String>,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     name: Option<String>,
/// }
///
/// impl Element for Coupon {
///     const NAME: &'static str = "coupon";
/// }
///
/// impl Resource for Coupon {
///     const COLLECTION: &'static str = "coupons";
///     const IDENTIFIER: &'static str = "coupon_code";
///
///     fn identifier(&self) -> Option<String> {
///         self.coupon_code.clone()
///     }
/// }
///
/// let coupon = Coupon { coupon_code: Some("spring".into()), name: None };
/// assert_eq!(coupon.path().unwrap().to_string(), "coupons/spring");
/// ```
pub trait Resource: Element + Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Collection segment (`accounts`).
    const COLLECTION: &'static str;

    /// Name of the identifying attribute (`account_code`). It cannot change
    /// once the resource exists remotely. Empty for resources that are only
    /// reachable through their parent (billing info, notes).
    const IDENTIFIER: &'static str;

    /// Attributes assigned by the server. They are never sent on update.
    const READ_ONLY: &'static [&'static str] = &[];

    /// Current identifier value, if set.
    fn identifier(&self) -> Option<String>;

    /// Canonical path of this resource (`accounts/<code>`).
    fn path(&self) -> Option<ResourcePath> {
        self.identifier()
            .filter(|id| !id.is_empty())
            .map(|id| Self::member_path(&id))
    }

    /// Path new resources of this type are posted to.
    fn collection_path(&self) -> ResourcePath {
        ResourcePath::new(Self::COLLECTION)
    }

    /// Path of the resource identified by `id`.
    fn member_path(id: &str) -> ResourcePath {
        ResourcePath::new(Self::COLLECTION).join(id)
    }
}

/// Declares that `Self` owns a list of `C` under `<self path>/<C::COLLECTION>`.
pub trait HasMany<C: Resource>: Resource {}

/// Declares that `Self` owns a single `C` under `<self path>/<C::COLLECTION>`.
pub trait HasOne<C: Resource>: Resource {}

//! HTTP verbs used by the Recurly v2 API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods the v2 API accepts.
///
/// Every resource operation maps onto exactly one of these verbs: reads are
/// `GET`, creates are `POST`, updates and state transitions (`reopen`,
/// `cancel`, `bulk_update`, ...) are `PUT`, and removals are `DELETE`.
///
/// ## Examples
///
/// ```rust
/// use recurly::RestMethod;
///
/// let method = RestMethod::Put;
/// assert!(method.has_body());
/// assert!(method.is_idempotent());
///
/// let parsed: RestMethod = "DELETE".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Delete);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Fetch a resource or collection.
    Get,
    /// Create a resource.
    Post,
    /// Update a resource or trigger a state transition.
    Put,
    /// Remove (or close) a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if requests with this verb carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns `true` if repeating the call has the same effect as making it once.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

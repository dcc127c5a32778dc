//! Resource paths relative to the API root.
//!
//! Paths follow `/v2/<collection>[/<id>][/<nested>]`. Segments are kept
//! unencoded and percent-encoded only when joined onto the base URL, so an
//! account code such as `a/b c` cannot escape its segment.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// A path below the API root, e.g. `accounts/abc/subscriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// A path with a single segment, typically a collection name.
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Appends a segment.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use recurly::resource::ResourcePath;
    ///
    /// let path = ResourcePath::new("accounts").join("abc").join("reopen");
    /// assert_eq!(path.to_string(), "accounts/abc/reopen");
    /// ```
    pub fn join(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// The unencoded segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Resolves this path against `base` (which should end in `/v2/`).
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::UnsupportedBaseUrl`] if `base` cannot carry a path.
    pub fn to_url(&self, base: &Url) -> Result<Url, ConfigError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::UnsupportedBaseUrl {
                url: base.to_string(),
            })?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

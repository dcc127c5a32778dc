//! Body encoding and decoding errors.

use thiserror::Error;

/// Errors while converting between resources and wire bodies.
#[derive(Debug, Error)]
pub enum FormatError {
    /// JSON encoding or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML parsing failed.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::DeError),

    /// XML serialization failed.
    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::SeError),

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,
}

impl FormatError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::XmlParse(_))
    }
}

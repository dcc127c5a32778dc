//! Wire formats for request and response bodies.
//!
//! The v2 API speaks XML. JSON is supported with the same element tree: an
//! XML document `<account><account_code>a</account_code></account>` maps to
//! the JSON object `{"account_code": "a"}` (the root element is implied by
//! the endpoint), and a list `<line_items><adjustment/>..</line_items>` maps
//! to `{"adjustment": [..]}`. Error documents are the exception; see
//! [`errors`].

pub mod errors;
mod list;
mod nil;

pub use list::{Element, List};

use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{Display, EnumString};

use crate::error::{FieldErrors, FormatError};

/// Encoding used for bodies on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum WireFormat {
    /// `application/xml`, the native v2 format.
    #[default]
    Xml,
    /// `application/json`.
    Json,
}

impl WireFormat {
    /// Value for the `Accept` header.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
            Self::Json => "application/json",
        }
    }

    /// Value for the `Content-Type` header.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Xml => "application/xml; charset=utf-8",
            Self::Json => "application/json; charset=utf-8",
        }
    }

    /// Encodes `value` with `root` as its element name.
    ///
    /// JSON has no root element, so `root` is only used for XML.
    pub fn encode<T: Serialize + ?Sized>(self, root: &str, value: &T) -> Result<String, FormatError> {
        match self {
            Self::Xml => Ok(quick_xml::se::to_string_with_root(root, value)?),
            Self::Json => Ok(serde_json::to_string(value)?),
        }
    }

    /// Decodes a single document.
    ///
    /// XML elements marked `nil` decode as absent.
    pub fn decode<T: DeserializeOwned>(self, body: &[u8]) -> Result<T, FormatError> {
        if is_blank(body) {
            return Err(FormatError::EmptyBody);
        }
        match self {
            Self::Xml => {
                let body = nil::strip_nil(body).map_err(quick_xml::DeError::from)?;
                Ok(quick_xml::de::from_reader(&*body)?)
            }
            Self::Json => Ok(serde_json::from_slice(body)?),
        }
    }

    /// Decodes a collection document (`<plans type="array"><plan/>..</plans>`).
    ///
    /// An empty body is an empty collection.
    pub fn decode_list<T: Element + DeserializeOwned>(self, body: &[u8]) -> Result<Vec<T>, FormatError> {
        if is_blank(body) {
            return Ok(Vec::new());
        }
        let list: List<T> = self.decode(body)?;
        Ok(list.into_vec())
    }

    /// Decodes the field errors of a 422 response for resource `root`.
    ///
    /// Bodies that cannot be parsed become a single message holding the raw
    /// text, so the caller always sees what the server said.
    pub fn decode_field_errors(self, root: &str, body: &[u8]) -> FieldErrors {
        errors::parse_field_errors(self, body).strip_prefix(root)
    }

    /// Extracts a human-readable message from an error response body.
    pub fn decode_error_message(self, body: &[u8]) -> String {
        errors::parse_error_message(self, body)
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

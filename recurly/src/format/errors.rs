//! Error documents returned with non-success statuses.
//!
//! XML:
//!
//! ```xml
//! <errors>
//!   <error field="account.account_code" symbol="blank">can't be blank</error>
//! </errors>
//!
//! <error>
//!   <symbol>not_found</symbol>
//!   <description lang="en-US">Couldn't find Account with account_code = x</description>
//! </error>
//! ```
//!
//! JSON:
//!
//! ```json
//! {"errors": [{"field": "account.account_code", "symbol": "blank", "message": "can't be blank"}]}
//! {"error": {"symbol": "not_found", "description": "Couldn't find Account with account_code = x"}}
//! ```

use serde::Deserialize;

use super::WireFormat;
use crate::error::{FieldError, FieldErrors};

#[derive(Debug, Default, Deserialize)]
struct XmlErrors {
    #[serde(rename = "error", default)]
    errors: Vec<XmlFieldError>,
}

#[derive(Debug, Deserialize)]
struct XmlFieldError {
    #[serde(rename = "@field")]
    field: Option<String>,
    #[serde(rename = "@symbol")]
    symbol: Option<String>,
    #[serde(rename = "$text", default)]
    message: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDescription {
    symbol: Option<String>,
    description: Option<String>,
}

impl ErrorDescription {
    fn message(self) -> Option<String> {
        self.description.or(self.symbol)
    }
}

#[derive(Debug, Default, Deserialize)]
struct JsonErrors {
    #[serde(default)]
    errors: Vec<JsonFieldError>,
    error: Option<ErrorDescription>,
}

#[derive(Debug, Deserialize)]
struct JsonFieldError {
    field: Option<String>,
    symbol: Option<String>,
    #[serde(default)]
    message: String,
}

fn raw_text(body: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(body).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn single(message: String) -> FieldErrors {
    std::iter::once(FieldError {
        field: None,
        symbol: None,
        message,
    })
    .collect()
}

pub(super) fn parse_field_errors(format: WireFormat, body: &[u8]) -> FieldErrors {
    let parsed: FieldErrors = match format {
        WireFormat::Xml => quick_xml::de::from_reader::<_, XmlErrors>(body)
            .map(|doc| {
                doc.errors
                    .into_iter()
                    .map(|e| FieldError {
                        field: e.field,
                        symbol: e.symbol,
                        message: e.message,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        WireFormat::Json => serde_json::from_slice::<JsonErrors>(body)
            .map(|doc| {
                doc.errors
                    .into_iter()
                    .map(|e| FieldError {
                        field: e.field,
                        symbol: e.symbol,
                        message: e.message,
                    })
                    .collect()
            })
            .unwrap_or_default(),
    };

    if !parsed.is_empty() {
        return parsed;
    }
    let message = parse_error_message(format, body);
    if message.is_empty() {
        FieldErrors::default()
    } else {
        single(message)
    }
}

pub(super) fn parse_error_message(format: WireFormat, body: &[u8]) -> String {
    let described = match format {
        WireFormat::Xml => quick_xml::de::from_reader::<_, ErrorDescription>(body)
            .ok()
            .and_then(ErrorDescription::message),
        WireFormat::Json => serde_json::from_slice::<JsonErrors>(body)
            .ok()
            .and_then(|doc| doc.error)
            .and_then(ErrorDescription::message),
    };
    described.or_else(|| raw_text(body)).unwrap_or_default()
}

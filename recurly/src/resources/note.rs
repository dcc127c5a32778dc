use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::Element;
use crate::resource::Resource;

/// A free-form note on an account (`accounts/<code>/notes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Element for Note {
    const NAME: &'static str = "note";
}

impl Resource for Note {
    const COLLECTION: &'static str = "notes";
    const IDENTIFIER: &'static str = "";
    const READ_ONLY: &'static [&'static str] = &["created_at"];

    fn identifier(&self) -> Option<String> {
        None
    }
}

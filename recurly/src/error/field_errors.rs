//! Field-level validation messages returned with HTTP 422.

use std::fmt;

/// A single validation message reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Attribute the message applies to, without the resource prefix.
    /// `None` for messages about the whole resource.
    pub field: Option<String>,
    /// Machine-readable reason (`blank`, `invalid`, `taken`, ...).
    pub symbol: Option<String>,
    /// Human-readable message (`can't be blank`).
    pub message: String,
}

/// All validation messages from one failed request, in server order.
///
/// ## Examples
///
/// ```rust
/// use recurly::error::FieldErrors;
///
/// let mut errors = FieldErrors::default();
/// errors.add("account_code", "can't be blank");
/// errors.add("account_code", "is invalid");
///
/// assert_eq!(errors.get("account_code"), ["can't be blank", "is invalid"]);
/// assert!(errors.get("email").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Records a message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: Some(field.into()),
            symbol: None,
            message: message.into(),
        });
    }

    /// Records a fully described error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Messages reported for `field`.
    pub fn get(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field.as_deref() == Some(field))
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Distinct field names that have at least one message.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for name in self.errors.iter().filter_map(|e| e.field.as_deref()) {
            if !fields.contains(&name) {
                fields.push(name);
            }
        }
        fields
    }

    /// Iterates over every message.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns `true` if no messages were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Drops the `<resource>.` prefix the server puts on field paths, so that
    /// `account.account_code` is filed under `account_code`.
    pub(crate) fn strip_prefix(mut self, resource: &str) -> Self {
        let prefix = format!("{resource}.");
        for error in &mut self.errors {
            if let Some(field) = error.field.as_mut() {
                if let Some(rest) = field.strip_prefix(&prefix) {
                    *field = rest.to_string();
                }
            }
        }
        self
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "no details returned");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match &error.field {
                Some(field) => write!(f, "{field} {}", error.message)?,
                None => write!(f, "{}", error.message)?,
            }
        }
        Ok(())
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

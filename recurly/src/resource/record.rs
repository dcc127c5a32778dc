//! Change-tracked wrapper around a resource.

use std::ops::{Deref, DerefMut};

use serde_json::{Map, Value};

use super::{HasOne, Resource, ResourcePath};
use crate::error::{ApiError, FieldErrors};

/// A resource plus its sync state with the server.
///
/// `Record` dereferences to the resource, so attributes are read and
/// assigned directly:
///
/// ```rust,ignore
/// let mut account = client.find::<Account>("verena").await?;
/// account.last_name = Some("Update Test".into());
/// assert_eq!(account.changed(), ["last_name"]);
/// client.save_strict(&mut account).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Record<R> {
    attributes: R,
    uri: Option<ResourcePath>,
    snapshot: Option<Map<String, Value>>,
    errors: FieldErrors,
    persisted: bool,
    destroyed: bool,
}

/// Attribute tree of a resource. Resources always serialize as objects.
fn attribute_map<R: Resource>(attributes: &R) -> Map<String, Value> {
    match serde_json::to_value(attributes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

impl<R: Resource> Record<R> {
    /// A record that does not exist remotely yet.
    pub fn new(attributes: R) -> Self {
        Self {
            attributes,
            uri: None,
            snapshot: None,
            errors: FieldErrors::default(),
            persisted: false,
            destroyed: false,
        }
    }

    /// A new record that is saved with `PUT` to a known path rather than
    /// posted to its collection (billing info under an account).
    pub fn at(uri: ResourcePath, attributes: R) -> Self {
        Self {
            uri: Some(uri),
            ..Self::new(attributes)
        }
    }

    /// A new single child of `parent`, saved to `<parent path>/<collection>`.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::NotFound`] if `parent` has no path yet.
    pub fn under<P: HasOne<R>>(parent: &Record<P>, attributes: R) -> Result<Self, ApiError> {
        Ok(Self::at(parent.location()?.join(R::COLLECTION), attributes))
    }

    /// A record freshly loaded from the server.
    pub(crate) fn loaded(attributes: R, uri: Option<ResourcePath>) -> Self {
        let mut record = Self::new(attributes);
        record.mark_loaded(uri);
        record
    }

    /// Replaces the attributes with the server's and resets change tracking.
    pub(crate) fn replace(&mut self, attributes: R, uri: Option<ResourcePath>) {
        self.attributes = attributes;
        self.mark_loaded(uri);
    }

    fn mark_loaded(&mut self, uri: Option<ResourcePath>) {
        let uri = self.attributes.path().or(uri).or_else(|| self.uri.take());
        self.uri = uri;
        self.snapshot = Some(attribute_map(&self.attributes));
        self.errors = FieldErrors::default();
        self.persisted = true;
        self.destroyed = false;
    }

    pub(crate) fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.persisted = false;
        self.destroyed = true;
    }

    /// The wrapped resource.
    pub fn attributes(&self) -> &R {
        &self.attributes
    }

    /// The wrapped resource, mutably.
    pub fn attributes_mut(&mut self) -> &mut R {
        &mut self.attributes
    }

    /// Unwraps the resource.
    pub fn into_inner(self) -> R {
        self.attributes
    }

    /// Path this record was loaded from or will be saved to.
    pub fn uri(&self) -> Option<&ResourcePath> {
        self.uri.as_ref()
    }

    /// Returns `true` once the server has acknowledged the record.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Returns `true` after a successful destroy.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns `true` unless the last save was rejected.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field errors from the last rejected save.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Path to address this record remotely: where it was loaded from, or
    /// its canonical path.
    pub(crate) fn location(&self) -> Result<ResourcePath, ApiError> {
        self.uri
            .clone()
            .or_else(|| self.attributes.path())
            .ok_or_else(|| ApiError::NotFound {
                message: format!("{} has not been saved", R::NAME),
            })
    }

    /// Names of the attributes that differ from the loaded state.
    ///
    /// For a new record every attribute that is set counts as changed.
    pub fn changed(&self) -> Vec<String> {
        let current = attribute_map(&self.attributes);
        let Some(snapshot) = &self.snapshot else {
            return current.keys().cloned().collect();
        };

        let mut changed: Vec<String> = current
            .iter()
            .filter(|(name, value)| snapshot.get(*name) != Some(*value))
            .map(|(name, _)| name.clone())
            .collect();
        changed.extend(
            snapshot
                .keys()
                .filter(|name| !current.contains_key(*name))
                .cloned(),
        );
        changed
    }

    /// Returns `true` if `attribute` differs from the loaded state.
    pub fn is_changed(&self, attribute: &str) -> bool {
        self.changed().iter().any(|name| name == attribute)
    }

    /// The writable attributes to send on update, keyed by name.
    ///
    /// Cleared attributes are sent as null so the server clears them too.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::ImmutableAttribute`] if the identifier changed.
    pub fn changes(&self) -> Result<Map<String, Value>, ApiError> {
        let current = attribute_map(&self.attributes);
        let mut changes = Map::new();
        for name in self.changed() {
            if name == R::IDENTIFIER {
                if self.persisted {
                    return Err(ApiError::ImmutableAttribute {
                        field: R::IDENTIFIER,
                    });
                }
                continue;
            }
            if R::READ_ONLY.contains(&name.as_str()) {
                continue;
            }
            let value = current.get(&name).cloned().unwrap_or(Value::Null);
            changes.insert(name, value);
        }
        Ok(changes)
    }
}

impl<R> Deref for Record<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.attributes
    }
}

impl<R> DerefMut for Record<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.attributes
    }
}

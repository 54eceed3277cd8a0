//! Field declarations passed to the validators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::ValueKind;

/// Ordered mapping from field name to a per-field declaration.
///
/// Declaration order is kept so that error listings and filtered payloads
/// come back in the order the caller declared the fields. Declaring the same
/// name twice replaces the earlier entry in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap<T>(IndexMap<String, T>);

/// Expected value kind per field, for [`payload_eval`](super::payload_eval).
pub type FieldSpec = FieldMap<ValueKind>;

/// Allowed values per field, for [`fixed_values_eval`](super::fixed_values_eval).
pub type FixedValueSpec = FieldMap<Vec<Value>>;

impl<T> FieldMap<T> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style declaration of one field.
    pub fn field(mut self, name: impl Into<String>, decl: T) -> Self {
        self.insert(name.into(), decl);
        self
    }

    pub fn insert(&mut self, name: String, decl: T) {
        self.0.insert(name, decl);
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(name, decl)| (name.as_str(), decl))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>, T> FromIterator<(N, T)> for FieldMap<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, decl)| (name.into(), decl))
                .collect(),
        )
    }
}

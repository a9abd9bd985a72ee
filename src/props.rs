//! Free-form key/value configuration shared with external collaborators.
//!
//! The core stores these entries but never interprets them; persistence
//! layers and UI panels read and write whatever keys they agree on.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single opaque property value.
///
/// Untagged so that TOML/JSON scalars map directly onto the variants
/// (`true`, `3`, `0.5`, `"grid"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Open string-keyed property map (last write wins, lookups permissive).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    entries: HashMap<String, PropValue>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a property; `None` when the key was never set.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    /// Sets a property, replacing any previous value under the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a property, returning the old value if present.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into self, later entries winning.
    pub fn extend(&mut self, other: Properties) {
        self.entries.extend(other.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_previous_value() {
        let mut props = Properties::new();
        props.set("grid", true);
        props.set("grid", false);
        assert_eq!(props.get("grid"), Some(&PropValue::Bool(false)));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn unknown_key_is_none() {
        let props = Properties::new();
        assert!(props.get("zoom").is_none());
        assert!(!props.contains("zoom"));
    }

    #[test]
    fn scalar_values_deserialize_untagged() {
        let props: Properties =
            toml::from_str("grid = true\nzoom = 1.5\ncolumns = 8\nmode = \"onion\"").unwrap();
        assert_eq!(props.get("grid"), Some(&PropValue::Bool(true)));
        assert_eq!(props.get("zoom"), Some(&PropValue::Float(1.5)));
        assert_eq!(props.get("columns"), Some(&PropValue::Int(8)));
        assert_eq!(props.get("mode"), Some(&PropValue::Text("onion".into())));
    }
}

//! Named placeholder storage.
//!
//! Placeholder names are always `":" + field_name`. There is no collision
//! handling: registering a name twice keeps the first position and the last
//! value, even though the SQL text still mentions the placeholder twice.

use crate::value::ScalarValue;

/// Prefix of every placeholder name.
pub const PLACEHOLDER_PREFIX: char = ':';

/// Build the placeholder name for a field.
pub fn placeholder_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len() + 1);
    name.push(PLACEHOLDER_PREFIX);
    name.push_str(field);
    name
}

/// Insert or overwrite `key`, keeping the position of the first insertion.
pub(crate) fn upsert_entry(entries: &mut Vec<(String, ScalarValue)>, key: String, value: ScalarValue) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

/// Insertion-ordered mapping of placeholder name to bound value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderRegistry {
    entries: Vec<(String, ScalarValue)>,
}

impl PlaceholderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Bind a value to a placeholder name, overwriting any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ScalarValue>) {
        upsert_entry(&mut self.entries, name.into(), value.into());
    }

    /// Register the value for `field` under its placeholder name and return
    /// that name.
    pub fn register_field(&mut self, field: &str, value: &ScalarValue) -> String {
        let name = placeholder_name(field);
        self.set(name.clone(), value.clone());
        name
    }

    pub fn get(&self, name: &str) -> Option<&ScalarValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the current placeholder count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Remove all placeholders.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn into_vec(self) -> Vec<(String, ScalarValue)> {
        self.entries
    }

    /// Export as a JSON object for an execution layer.
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        // serde_json::Map is a BTreeMap without `preserve_order`, so callers
        // that need order should use `iter()`.
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

// ABOUTME: Ordered name-to-value mapping consumed by the substitution engine
// ABOUTME: Values may be unset so that absent build inputs surface as render errors

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// Variables available to a single render, kept in insertion order.
///
/// A value of `None` marks a variable that was expected but never supplied.
/// Rendering fails on such entries instead of writing a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableMapping {
    entries: IndexMap<String, Option<String>>,
}

impl VariableMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value but keeping its position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Some(value.into()));
    }

    /// Set a variable whose value may be absent
    pub fn insert_optional(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a variable. `Some(None)` means the key exists but is unset.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Layer plain string variables on top of the existing ones
    pub fn extend(&mut self, vars: HashMap<String, String>) {
        // Sorted so that the listing order does not depend on hash order
        let mut vars: Vec<_> = vars.into_iter().collect();
        vars.sort();
        for (key, value) in vars {
            self.insert(key, value);
        }
    }

    /// Convert to JSON, with unset values as `null`
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::syntax::DEFAULT_FLAG_VALUE;

/// A resolved key → value mapping.
///
/// Keys are kept sorted so listings and exports are stable. Writing a key
/// that already exists replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    entries: BTreeMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when `key` holds the default flag value (`"1"`).
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some(DEFAULT_FLAG_VALUE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Layer `other` on top of `self`; keys from `other` win.
    pub fn extend_from(&mut self, other: Settings) {
        self.entries.extend(other.entries);
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }

    pub(crate) fn insert(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

impl From<BTreeMap<String, String>> for Settings {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Settings {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

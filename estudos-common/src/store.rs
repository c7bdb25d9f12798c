//! # Persistent Key-Value Store
//!
//! A string-to-string map with functional updates, backed by `im::HashMap`.
//! Inserting returns a new store and leaves the original untouched; the two
//! share structure, so the copy is cheap.
//!
//! ## Example
//!
//! ```
//! use estudos_common::store::KeyValueStore;
//!
//! let empty = KeyValueStore::new();
//! let store = empty
//!     .insert("joao", "valor1")
//!     .insert("ana", "valor2");
//!
//! assert_eq!(store.get("joao"), Some("valor1"));
//! assert_eq!(store.get("maria"), None);
//! assert!(empty.is_empty()); // unchanged
//! ```

use im::HashMap as ImHashMap;

/// An immutable mapping from string keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueStore {
    entries: ImHashMap<String, String>,
}

impl KeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: ImHashMap::new(),
        }
    }

    /// Returns a new store with `key` bound to `value`.
    ///
    /// An existing binding for `key` is replaced in the returned store only.
    #[must_use]
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entries: self.entries.update(key.into(), value.into()),
        }
    }

    /// Returns a new store without `key`.
    #[must_use]
    pub fn remove(&self, key: &str) -> Self {
        Self {
            entries: self.entries.without(key),
        }
    }

    /// Looks up the value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Checks if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for KeyValueStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

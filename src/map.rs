//! Ordered map type for the structural encoding of classes.
//!
//! [`ConfigMap`] wraps an [`IndexMap`] so that entries keep declaration order.
//! Re-inserting an existing key replaces its value but keeps its original
//! position, which is how inherited entries are shadowed by a class's own.
//!
//! ## Examples
//!
//! ```rust
//! use armaconfig::{ConfigMap, Value};
//!
//! let mut map = ConfigMap::new();
//! map.insert("displayName".to_string(), Value::from("Rifle"));
//! map.insert("mass".to_string(), Value::from(80));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("mass").and_then(|v| v.as_i64()), Some(80));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of member names to values.
///
/// # Examples
///
/// ```rust
/// use armaconfig::{ConfigMap, Value};
///
/// let mut map = ConfigMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
/// map.insert("first".to_string(), Value::from(3));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(map.get("first").and_then(|v| v.as_i64()), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigMap(IndexMap<String, crate::Value>);

impl ConfigMap {
    #[must_use]
    pub fn new() -> Self {
        ConfigMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ConfigMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<ConfigMap> for HashMap<String, crate::Value> {
    fn from(map: ConfigMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<(String, crate::Value)> for ConfigMap {
    fn extend<T: IntoIterator<Item = (String, crate::Value)>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl FromIterator<(String, crate::Value)> for ConfigMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        ConfigMap(IndexMap::from_iter(iter))
    }
}

//! String-keyed persistence bag
//!
//! The host stores extension data as a flat map of strings; every value is
//! codec-encoded JSON. Reads are fail-soft: a missing or undecodable value
//! reads as `None`. The map itself is long-lived and reused across
//! activations.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A mapping from string keys to codec-encoded values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionBag {
    values: IndexMap<String, String>,
}

impl ExtensionBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the host's raw key/value map at the storage boundary
    pub fn from_raw(values: IndexMap<String, String>) -> Self {
        Self { values }
    }

    /// The raw key/value map, for the host to persist
    pub fn as_raw(&self) -> &IndexMap<String, String> {
        &self.values
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether a key is present (decoded or not)
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Decode the value under `key`; absent or undecodable reads as `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let encoded = self.values.get(key)?;
        hexweave_codec::decompress_value(encoded).ok()
    }

    /// Encode and store a value.
    ///
    /// Returns false (leaving the bag untouched) when the value cannot be
    /// encoded.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> bool {
        match hexweave_codec::compress_value(value) {
            Ok(encoded) => {
                self.values.insert(key.to_string(), encoded);
                true
            }
            Err(_) => false,
        }
    }

    /// Store a raw pre-encoded string, as received over the wire
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a key; returns whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.shift_remove(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_round_trip() {
        let mut bag = ExtensionBag::new();
        assert!(bag.set("count", &42u32));
        assert_eq!(bag.get::<u32>("count"), Some(42));
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let bag = ExtensionBag::new();
        assert_eq!(bag.get::<u32>("missing"), None);
    }

    #[test]
    fn test_corrupt_value_reads_as_none() {
        let mut bag = ExtensionBag::new();
        bag.insert_raw("count", "!!! definitely not a valid blob !!!");
        assert!(bag.contains("count"));
        assert_eq!(bag.get::<u32>("count"), None);
    }

    #[test]
    fn test_remove() {
        let mut bag = ExtensionBag::new();
        bag.set("key", &"value");
        assert!(bag.remove("key"));
        assert!(!bag.remove("key"));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_raw_boundary_round_trip() {
        let mut bag = ExtensionBag::new();
        bag.set("a", &1u8);
        bag.set("b", &2u8);

        let adopted = ExtensionBag::from_raw(bag.as_raw().clone());
        assert_eq!(adopted.get::<u8>("a"), Some(1));
        assert_eq!(adopted.get::<u8>("b"), Some(2));
    }
}

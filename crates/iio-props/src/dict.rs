//! Untyped property dictionaries.
//!
//! [`RawMap`] is what the engine reads from and writes to an image or
//! container: an outer dictionary keyed by namespace (`{Exif}`, `{GPS}`,
//! `{GIF}`, ...) whose values are inner dictionaries keyed by field name.
//! Both levels use the same type.
//!
//! # Example
//!
//! ```rust
//! use iio_props::{RawMap, RawValue};
//!
//! let mut exif = RawMap::new();
//! exif.set("ExposureTime", 0.01);
//!
//! let mut outer = RawMap::new();
//! outer.set("{Exif}", exif);
//!
//! assert_eq!(
//!     outer.sub_map("{Exif}").and_then(|m| m.get("ExposureTime")),
//!     Some(&RawValue::Double(0.01))
//! );
//! ```

use crate::RawValue;
use std::collections::HashMap;

/// Dictionary: string key -> untyped value.
///
/// Keys are unique and iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawMap {
    map: HashMap<String, RawValue>,
}

impl RawMap {
    /// Creates an empty dictionary.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Creates a dictionary with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Sets a value, replacing any previous value under `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iio_props::RawMap;
    ///
    /// let mut gps = RawMap::new();
    /// gps.set("LatitudeRef", "N");
    /// gps.set("LatitudeRef", "S");
    ///
    /// assert_eq!(gps.get("LatitudeRef").and_then(|v| v.as_str()), Some("S"));
    /// ```
    #[inline]
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.map.insert(key.into(), value.into());
    }

    /// Gets a value by key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.map.get(key)
    }

    /// Gets a mutable reference to a value.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut RawValue> {
        self.map.get_mut(key)
    }

    /// Removes a value, returning it if it existed.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.map.remove(key)
    }

    /// Checks if a key exists.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no entries are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over all (key, value) pairs in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.map.iter()
    }

    /// Iterates over all keys in unspecified order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Clears all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Copies every entry of `other` into `self`, overwriting on collision.
    pub fn extend(&mut self, other: RawMap) {
        self.map.extend(other.map);
    }

    /// Gets the nested dictionary stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist or doesn't hold a `Map`.
    #[inline]
    pub fn sub_map(&self, key: &str) -> Option<&RawMap> {
        match self.map.get(key) {
            Some(RawValue::Map(m)) => Some(m),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for RawMap {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for RawMap {
    type Item = (String, RawValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, RawValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl std::fmt::Display for RawMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.map.keys().collect();
        keys.sort();

        for key in keys {
            if let Some(value) = self.map.get(key) {
                writeln!(f, "{}: {}", key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut map = RawMap::new();
        map.set("LoopCount", 0i64);
        map.set("HasGlobalColorMap", true);

        assert_eq!(map.len(), 2);
        assert!(map.contains("LoopCount"));
        assert_eq!(map.remove("LoopCount"), Some(RawValue::Int(0)));
        assert!(!map.contains("LoopCount"));
    }

    #[test]
    fn test_sub_map_requires_map_value() {
        let mut outer = RawMap::new();
        outer.set("{GPS}", RawMap::new());
        outer.set("{Exif}", "not a dictionary");

        assert!(outer.sub_map("{GPS}").is_some());
        assert!(outer.sub_map("{Exif}").is_none());
        assert!(outer.sub_map("{GIF}").is_none());
    }

    #[test]
    fn test_display_sorted() {
        let map: RawMap = [("b", RawValue::Int(2)), ("a", RawValue::Int(1))]
            .into_iter()
            .collect();
        assert_eq!(map.to_string(), "a: 1\nb: 2\n");
    }
}

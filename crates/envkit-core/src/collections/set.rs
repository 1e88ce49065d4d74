//! Generic set of unique values
//!
//! A thin typed wrapper over `HashSet` with constructors from maps and
//! slices, union/intersection, and a JSON array encoding.
//!
//! # Thread Safety
//!
//! `Set` has no internal locking. Mutation needs `&mut Set`, so sharing a set
//! between threads that write to it requires wrapping it in a `Mutex` or
//! `RwLock`.

use std::collections::hash_set;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from encoding or decoding a set
#[derive(Error, Debug)]
pub enum SetError {
    #[error("failed to decode set: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode set: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type SetResult<T> = Result<T, SetError>;

/// An unordered collection of distinct values
///
/// Serializes as an array; element order in the output is unspecified.
///
/// # Example
///
/// ```
/// use envkit_core::collections::Set;
///
/// let mut regions = Set::with_values(["eu-west-1", "us-east-1", "eu-west-1"]);
/// assert_eq!(regions.len(), 2);
///
/// regions.add("ap-south-1");
/// assert!(regions.contains(&"ap-south-1"));
///
/// let eu = Set::with_values(["eu-west-1", "eu-central-1"]);
/// assert_eq!(regions.intersection(&eu), Set::with_values(["eu-west-1"]));
/// ```
#[derive(Debug, Clone)]
pub struct Set<T> {
    items: HashSet<T>,
}

impl<T> Set<T> {
    /// Remove every element, keeping this set and its allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the elements in arbitrary order
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Create a set from a list of values, dropping duplicates
    pub fn with_values(values: impl IntoIterator<Item = T>) -> Self {
        values.into_iter().collect()
    }

    /// Create a set from the distinct values of a map
    pub fn from_map_values<K>(map: &HashMap<K, T>) -> Self
    where
        T: Clone,
    {
        let mut set = Self::with_capacity(map.len());
        for value in map.values() {
            set.add(value.clone());
        }
        set
    }

    /// Create a set from the keys of a map
    pub fn from_map_keys<V>(map: &HashMap<T, V>) -> Self
    where
        T: Clone,
    {
        map.keys().cloned().collect()
    }

    /// Create a set from a slice, dropping duplicates
    pub fn from_list(list: &[T]) -> Self
    where
        T: Clone,
    {
        list.iter().cloned().collect()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }

    /// Insert `value`; no-op if it is already present
    pub fn add(&mut self, value: T) {
        self.items.insert(value);
    }

    /// Remove `value`; no-op if it is absent
    pub fn remove(&mut self, value: &T) {
        self.items.remove(value);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Values present in either set; neither operand changes
    pub fn union(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        self.items.union(&other.items).cloned().collect()
    }

    /// Values present in both sets; neither operand changes
    pub fn intersection(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        self.items.intersection(&other.items).cloned().collect()
    }
}

impl<T: Serialize> Set<T> {
    /// Encode as a JSON array
    ///
    /// An empty set encodes as `[]`.
    pub fn to_json(&self) -> SetResult<String> {
        serde_json::to_string(self).map_err(SetError::Encode)
    }
}

impl<T: Eq + Hash + DeserializeOwned> Set<T> {
    /// Decode a JSON array
    pub fn from_json(json: &str) -> SetResult<Self> {
        serde_json::from_str(json).map_err(SetError::Decode)
    }

    /// Replace the contents with a decoded JSON array
    ///
    /// On error the set is left unchanged.
    pub fn load_json(&mut self, json: &str) -> SetResult<()> {
        *self = Self::from_json(json)?;
        Ok(())
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T: Eq + Hash + Deserialize<'de>> Deserialize<'de> for Set<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

/// Build a [`Set`] from a list of values
///
/// ```
/// use envkit_core::set;
///
/// let s = set![1, 2, 2, 3];
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collections::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::Set::with_values([$($value),+])
    };
}

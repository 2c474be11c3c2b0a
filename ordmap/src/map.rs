use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::iter::Iter;

/// A key-value map that preserves the order in which keys were first
/// inserted.
///
/// Unlike `HashMap`, iteration follows insertion order; unlike a sorted map,
/// keys keep the position they were given, even when their value is
/// overwritten later.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    pub(crate) pairs: HashMap<K, V>,
    pub(crate) order: Vec<K>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            pairs: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.order.clear();
    }
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// Returns a reference to the value stored for `key`.
    ///
    /// The returned `Option` distinguishes an absent key from a key that is
    /// present with an empty or null value.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.get(key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.get_mut(key)
    }

    /// Returns whether the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.contains_key(key)
    }

    /// Removes `key` from the map, returning its value. Removing an absent
    /// key is a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.pairs.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k.borrow() != key);
        }
        removed
    }

    /// Returns the values in current key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().map(|key| &self.pairs[key])
    }

    /// Returns `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.order, &self.pairs)
    }
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// Inserts `value` for `key`, returning the previous value if the key
    /// was already present. An existing key keeps its position; a new key is
    /// appended at the end of the order.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.pairs.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.order.push(key.clone());
        self.pairs.insert(key, value)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.pairs == other.pairs
    }
}

impl<K: Eq + Hash, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

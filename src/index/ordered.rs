//! Insertion-ordered containers used by the kanji indexes.
//!
//! Both containers keep first-seen order for iteration and serialization while
//! answering membership queries through an `ahash` table, so appending with a
//! membership check stays O(1).

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A set that remembers the order in which values were first inserted.
#[derive(Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    members: AHashSet<T>,
}

impl<T> OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty set.
    pub fn new() -> Self {
        OrderedSet {
            items: Vec::new(),
            members: AHashSet::new(),
        }
    }

    /// Insert a value, returning `true` if it was not already present.
    ///
    /// Values already present keep their original position.
    pub fn insert(&mut self, value: T) -> bool {
        if self.members.contains(&value) {
            return false;
        }
        self.members.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains(value)
    }

    /// Returns `true` if the two sets share no value.
    pub fn is_disjoint(&self, other: &OrderedSet<T>) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.items.iter().any(|value| large.contains(value))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the values in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Two sets are equal when they hold the same values in the same order.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Serialize> Serialize for OrderedSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// A map that iterates and serializes its keys in first-inserted order.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    positions: AHashMap<K, usize>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty map.
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
            positions: AHashMap::new(),
        }
    }

    /// Get a mutable reference to the value for `key`, inserting
    /// `V::default()` at the end of the map if the key is new.
    pub fn entry_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.positions.insert(key.clone(), position);
                self.entries.push((key, V::default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Insert a key-value pair. An existing key keeps its position and the
    /// previous value is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| &mut self.entries[position].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_first_seen_order() {
        let mut set = OrderedSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert!(set.insert("c"));

        assert_eq!(set.as_slice(), &["b", "a", "c"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("a"));
        assert!(!set.contains("z"));
    }

    #[test]
    fn test_set_disjoint() {
        let left: OrderedSet<char> = "今朝".chars().collect();
        let right: OrderedSet<char> = "朝食".chars().collect();
        let other: OrderedSet<char> = "楽".chars().collect();

        assert!(!left.is_disjoint(&right));
        assert!(!right.is_disjoint(&left));
        assert!(left.is_disjoint(&other));
        assert!(left.is_disjoint(&OrderedSet::new()));
    }

    #[test]
    fn test_map_entry_or_default() {
        let mut map: OrderedMap<String, OrderedSet<u32>> = OrderedMap::new();
        map.entry_or_default("z".to_string()).insert(1);
        map.entry_or_default("a".to_string()).insert(2);
        map.entry_or_default("z".to_string()).insert(3);

        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(map.get("z").unwrap().as_slice(), &[1, 3]);
        assert!(map.contains_key("a"));
        assert!(map.get("missing").is_none());

        map.get_mut("a").unwrap().insert(4);
        assert_eq!(map.get("a").unwrap().as_slice(), &[2, 4]);
        assert!(map.get_mut("missing").is_none());
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut map: OrderedMap<char, OrderedSet<String>> = OrderedMap::new();
        map.entry_or_default('食').insert("食べる".to_string());
        map.entry_or_default('今').insert("今朝".to_string());
        map.entry_or_default('今').insert("今晩".to_string());

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"食":["食べる"],"今":["今朝","今晩"]}"#);
    }
}

// Immutable string-keyed maps: a perfect-hash dictionary over the keys and a
// dense value array indexed by key rank.

use std::collections::BTreeMap;

use crate::dictionary::Iter;
use crate::{DictionaryBuilder, DictomatonError, Numbering, PerfectHashDictionary};

/// Immutable map from strings to values.
///
/// Keys are stored once in a minimal automaton; the value of a key is at
/// position `rank - 1` of a plain vector. Iteration is in key order.
#[derive(Debug, Clone)]
pub struct ImmutableStringMap<V> {
    keys: PerfectHashDictionary,
    values: Vec<V>,
}

impl<V> ImmutableStringMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        let rank = self.keys.number(key)?;
        self.values.get(rank as usize - 1)
    }

    /// Value of `key`, or `default` if the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> Iter<'_> {
        self.keys.iter()
    }

    /// Values in key order.
    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &V)> + '_ {
        self.keys.iter().zip(&self.values)
    }

    /// The key dictionary, for rank queries or fuzzy lookup.
    pub fn key_dictionary(&self) -> &PerfectHashDictionary {
        &self.keys
    }
}

/// Builds an [`ImmutableStringMap`] from entries in any order. A later
/// insertion of the same key replaces the earlier value.
#[derive(Debug, Clone)]
pub struct MapBuilder<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for MapBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MapBuilder<V> {
    pub fn new() -> Self {
        MapBuilder {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn build(self) -> ImmutableStringMap<V> {
        let mut builder = DictionaryBuilder::new();
        let mut values = Vec::with_capacity(self.entries.len());
        // BTreeMap keys are unique and ascending.
        for (key, value) in self.entries {
            builder.insert_unchecked(&key);
            values.push(value);
        }
        ImmutableStringMap {
            keys: builder.build_perfect_hash(Numbering::TransitionCardinality),
            values,
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for MapBuilder<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}

/// Builds an [`ImmutableStringMap`] from entries that arrive in strictly
/// increasing key order, without buffering the keys.
#[derive(Debug)]
pub struct OrderedMapBuilder<V> {
    builder: DictionaryBuilder,
    values: Vec<V>,
}

impl<V> Default for OrderedMapBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedMapBuilder<V> {
    pub fn new() -> Self {
        OrderedMapBuilder {
            builder: DictionaryBuilder::new(),
            values: Vec::new(),
        }
    }

    /// Add an entry. Fails, leaving the builder unchanged, if `key` does not
    /// sort after the previous key.
    pub fn insert(&mut self, key: &str, value: V) -> Result<&mut Self, DictomatonError> {
        self.builder.add(key)?;
        self.values.push(value);
        Ok(self)
    }

    pub fn build(self) -> ImmutableStringMap<V> {
        ImmutableStringMap {
            keys: self
                .builder
                .build_perfect_hash(Numbering::TransitionCardinality),
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_builder() {
        let mut builder = MapBuilder::new();
        builder.insert("zeven", 7).insert("al", 1).insert("mooie", 3);
        builder.insert("al", 2);
        let map = builder.build();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("al"), Some(&2));
        assert_eq!(map.get("zeven"), Some(&7));
        assert_eq!(map.get("zes"), None);
        assert_eq!(*map.get_or("zes", &0), 0);
        assert!(map.contains_key("mooie"));
        assert!(!map.contains_key("mooi"));

        let keys: Vec<String> = map.keys().collect();
        assert_eq!(keys, ["al", "mooie", "zeven"]);
        let values: Vec<i32> = map.values().copied().collect();
        assert_eq!(values, [2, 3, 7]);
    }

    #[test]
    fn ordered_builder() {
        let mut builder = OrderedMapBuilder::new();
        builder.insert("groene", "green").unwrap();
        builder.insert("oude", "old").unwrap();

        let err = builder.insert("mooie", "pretty").unwrap_err();
        assert!(matches!(err, DictomatonError::OrderViolation { .. }));

        builder.insert("rare", "weird").unwrap();
        let map = builder.build();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("oude"), Some(&"old"));
        assert_eq!(map.get("mooie"), None);

        let entries: Vec<(String, &str)> = map.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(
            entries,
            [
                ("groene".to_string(), "green"),
                ("oude".to_string(), "old"),
                ("rare".to_string(), "weird")
            ]
        );
    }

    #[test]
    fn extend_and_empty_key() {
        let mut builder = MapBuilder::new();
        builder.extend([("", 0u8), ("b", 2), ("a", 1)]);
        let map = builder.build();
        assert_eq!(map.get(""), Some(&0));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.key_dictionary().number("a"), Some(2));
    }

    #[test]
    fn empty_map() {
        let map = MapBuilder::<u32>::new().build();
        assert!(map.is_empty());
        assert_eq!(map.get(""), None);
        assert_eq!(map.iter().count(), 0);
    }
}

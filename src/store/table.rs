//! Table Module
//!
//! Keyed record storage that remembers insertion order.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// == Table ==
/// Upsert-style keyed storage with stable, insertion-ordered scans.
///
/// Rows are kept in a `BTreeMap` keyed by an insertion sequence number, with a
/// `HashMap` from record key to sequence for point access. Overwriting an
/// existing key keeps the row in its original position.
#[derive(Debug)]
pub struct Table<K, V> {
    rows: BTreeMap<u64, (K, V)>,
    index: HashMap<K, u64>,
    next_seq: u64,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Inserts or replaces the record stored under `key`.
    ///
    /// Returns the previous record if one existed.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(seq) = self.index.get(&key) {
            return self
                .rows
                .insert(*seq, (key, value))
                .map(|(_, previous)| previous);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(key.clone(), seq);
        self.rows.insert(seq, (key, value));
        None
    }

    // == Get ==
    /// Returns the record stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index
            .get(key)
            .and_then(|seq| self.rows.get(seq))
            .map(|(_, value)| value)
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Delete ==
    /// Removes the record stored under `key`.
    ///
    /// Returns whether a record existed. Deleting an absent key is a no-op here;
    /// callers decide whether that is an error.
    pub fn delete(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(seq) => {
                self.rows.remove(&seq);
                true
            }
            None => false,
        }
    }

    // == Scan ==
    /// Returns every record matching `predicate`, in insertion order.
    pub fn scan<P>(&self, mut predicate: P) -> Vec<&V>
    where
        P: FnMut(&V) -> bool,
    {
        self.rows
            .values()
            .map(|(_, value)| value)
            .filter(|value| predicate(value))
            .collect()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

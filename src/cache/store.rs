//! Cache Store Module
//!
//! Result cache combining HashMap storage with LRU tracking and
//! region-aware invalidation.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{
    CacheEntry, CacheKey, CacheRegion, CacheStats, CachedValue, Invalidation, LruTracker,
};
use crate::error::CacheError;

// == Cache Store ==
/// Cached read results, bounded by entry count.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<CacheKey, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker<CacheKey>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed; 0 disables caching
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `max_entries` results.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Get ==
    /// Returns the cached result for `key`, recording a hit or a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<CachedValue> {
        match self.entries.get(key) {
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit(key.region);
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.stats.record_miss(key.region);
                None
            }
        }
    }

    // == Insert ==
    /// Stores a freshly computed result.
    ///
    /// If the key already exists the value is replaced. If the cache is at
    /// capacity, the least recently used entry is evicted first.
    pub fn insert(&mut self, key: CacheKey, value: CachedValue) -> Result<(), CacheError> {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            match self.lru.evict_oldest() {
                Some(evicted_key) => {
                    if let Some(entry) = self.entries.remove(&evicted_key) {
                        debug!("Evicted {} after {} ms", evicted_key, entry.age_ms());
                    }
                    self.stats.record_eviction();
                }
                None => return Err(CacheError::Full(self.max_entries)),
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
        Ok(())
    }

    // == Invalidate ==
    /// Removes one entry. Returns whether it was present.
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            self.stats.record_invalidation(key.region);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Invalidate Region ==
    /// Removes every entry in `region`. Returns the number removed.
    pub fn invalidate_region(&mut self, region: CacheRegion) -> usize {
        self.apply(&Invalidation::new().region(region))
    }

    // == Apply ==
    /// Removes every entry covered by `plan`. Returns the number removed.
    pub fn apply(&mut self, plan: &Invalidation) -> usize {
        if plan.is_empty() {
            return 0;
        }

        let stale: Vec<CacheKey> = self
            .entries
            .keys()
            .filter(|key| plan.covers(key))
            .cloned()
            .collect();
        self.drop_entries(&stale);
        stale.len()
    }

    // == Clear ==
    /// Drops every entry. Returns the number removed.
    pub fn clear(&mut self) -> usize {
        let all: Vec<CacheKey> = self.entries.keys().cloned().collect();
        self.entries.clear();
        self.lru.clear();
        for key in &all {
            self.stats.record_invalidation(key.region);
        }
        self.stats.set_total_entries(0);
        all.len()
    }

    /// Removes `keys`, which must all be present, counting each as an invalidation.
    fn drop_entries(&mut self, keys: &[CacheKey]) {
        if keys.is_empty() {
            return;
        }
        for key in keys {
            self.entries.remove(key);
            self.stats.record_invalidation(key.region);
        }
        self.lru.retain(|key| !keys.contains(key));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Contains ==
    /// Checks for an entry without touching stats or recency.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    // == Region Length ==
    /// Number of entries currently held for `region`.
    pub fn region_len(&self, region: CacheRegion) -> usize {
        self.entries.keys().filter(|key| key.region == region).count()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Cache Statistics Module
//!
//! Counters for the result cache, overall and per region.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::CacheRegion;

// == Region Counters ==
/// Lookups and invalidations for a single region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegionCounters {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
}

// == Cache Stats ==
/// Cache performance metrics.
///
/// Capacity evictions are only counted overall; they are a property of the
/// whole cache rather than of any one operation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to go to the store
    pub misses: u64,
    /// Entries pushed out by the capacity bound
    pub evictions: u64,
    /// Entries removed because the data behind them changed
    pub invalidations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Breakdown by region name; regions never touched are absent
    pub regions: BTreeMap<&'static str, RegionCounters>,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Counters for `region`, zero if it has seen no traffic.
    pub fn region(&self, region: CacheRegion) -> RegionCounters {
        self.regions.get(region.name()).copied().unwrap_or_default()
    }

    fn region_mut(&mut self, region: CacheRegion) -> &mut RegionCounters {
        self.regions.entry(region.name()).or_default()
    }

    pub fn record_hit(&mut self, region: CacheRegion) {
        self.hits += 1;
        self.region_mut(region).hits += 1;
    }

    pub fn record_miss(&mut self, region: CacheRegion) {
        self.misses += 1;
        self.region_mut(region).misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_invalidation(&mut self, region: CacheRegion) {
        self.invalidations += 1;
        self.region_mut(region).invalidations += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

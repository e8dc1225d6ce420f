//! Invalidation Plans
//!
//! A mutation describes what it may have made stale as a set of exact keys
//! and whole regions. The cache applies the plan in one step.

use crate::cache::{CacheKey, CacheRegion};

// == Invalidation ==
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invalidation {
    keys: Vec<CacheKey>,
    regions: Vec<CacheRegion>,
}

impl Invalidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one exact key.
    pub fn key(mut self, key: CacheKey) -> Self {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
        self
    }

    /// Adds several exact keys.
    pub fn keys<I>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = CacheKey>,
    {
        keys.into_iter().fold(self, Invalidation::key)
    }

    /// Adds a whole region.
    pub fn region(mut self, region: CacheRegion) -> Self {
        if !self.regions.contains(&region) {
            self.regions.push(region);
        }
        self
    }

    /// True if applying the plan cannot remove anything.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.regions.is_empty()
    }

    /// Whether `key` falls under this plan.
    pub fn covers(&self, key: &CacheKey) -> bool {
        self.regions.contains(&key.region) || self.keys.contains(key)
    }
}

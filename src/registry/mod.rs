//! Registry Module
//!
//! The operations offered to the HTTP layer. Every read goes through the
//! result cache; every write updates the store and then invalidates whatever
//! cached results it may have changed before reporting success.
//!
//! # Locking
//! The store and the cache each sit behind their own `RwLock`, always taken
//! in the order store → cache.
//! - Writers hold the store write lock across the mutation and the
//!   invalidation, so writes serialize and a completed write is never
//!   followed by a stale hit.
//! - Readers that miss hold the store read lock while loading and
//!   populating, so a concurrent writer's invalidation lands either before
//!   the load or after the populate.

mod classrooms;
mod plans;
mod students;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, CacheStore, Cacheable, Invalidation};
use crate::config::Config;
use crate::error::Result;
use crate::store::{EntityStore, SharedStore};

// == Registry ==
/// Cached front for the entity store. Cloning shares the same store and cache.
#[derive(Clone, Debug)]
pub struct Registry {
    store: SharedStore,
    cache: Arc<RwLock<CacheStore>>,
}

impl Registry {
    // == Constructor ==
    /// Creates a registry over an existing store handle.
    pub fn new(store: SharedStore, cache: CacheStore) -> Self {
        Self {
            store,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a registry with an empty store and a cache sized from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            EntityStore::shared(),
            CacheStore::new(config.cache_max_entries),
        )
    }

    // == Cache Stats ==
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // == Flush Cache ==
    /// Drops every cached result. Returns the number removed.
    pub async fn flush_cache(&self) -> usize {
        let _store = self.store.write().await;
        self.cache.write().await.clear()
    }

    /// Whether `key` currently has a cached result.
    pub async fn is_cached(&self, key: &CacheKey) -> bool {
        self.cache.read().await.contains(key)
    }

    // == Read Through ==
    /// Serves `key` from the cache, or computes it with `load` and caches it.
    ///
    /// Errors from `load` are returned as-is and never cached.
    async fn read_through<T, F>(&self, key: CacheKey, load: F) -> Result<T>
    where
        T: Cacheable,
        F: FnOnce(&EntityStore) -> Result<T>,
    {
        let cached = self.cache.write().await.get(&key);
        if let Some(value) = cached.and_then(T::from_cached) {
            debug!("Cache hit: {}", key);
            return Ok(value);
        }
        debug!("Cache miss: {}", key);

        let store = self.store.read().await;
        let value = load(&*store)?;

        let mut cache = self.cache.write().await;
        if let Err(err) = cache.insert(key.clone(), value.clone().into_cached()) {
            debug!("Result for {} not cached: {}", key, err);
        }
        drop(cache);
        drop(store);

        Ok(value)
    }

    // == Write Invalidate ==
    /// Runs `mutate` against the store, then applies the invalidation plan it
    /// returns. Nothing is invalidated if `mutate` fails.
    async fn write_invalidate<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut EntityStore) -> Result<(T, Invalidation)>,
    {
        let mut store = self.store.write().await;
        let (output, plan) = mutate(&mut *store)?;

        let removed = self.cache.write().await.apply(&plan);
        if removed > 0 {
            debug!("Invalidated {} cached results", removed);
        }
        drop(store);

        Ok(output)
    }
}

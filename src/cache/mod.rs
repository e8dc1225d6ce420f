//! Cache Module
//!
//! Read-through, write-invalidate result cache for registry reads. Entries are
//! keyed by operation and argument tuple and live until a mutation
//! invalidates them or the capacity bound pushes them out.

mod entry;
mod invalidation;
mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, Cacheable, CachedValue};
pub use invalidation::Invalidation;
pub use key::{CacheKey, CacheRegion};
pub use lru::LruTracker;
pub use stats::{CacheStats, RegionCounters};
pub use store::CacheStore;

// == Public Constants ==
/// Default capacity when none is configured
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

//! Cache Entry Module
//!
//! Defines cached values and the entries that hold them. Entries carry no TTL;
//! they stay until invalidated or pushed out by the capacity bound.

use chrono::Utc;

use crate::store::{Classroom, Student};

// == Cached Value ==
/// Result of one of the cached read operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    Student(Student),
    Classroom(Classroom),
    Students(Vec<Student>),
    Classrooms(Vec<Classroom>),
}

// == Cacheable ==
/// Read results that can go through the cache.
pub trait Cacheable: Clone + Sized {
    /// Wraps the value for storage.
    fn into_cached(self) -> CachedValue;

    /// Unwraps a stored value, or `None` if it holds a different shape.
    fn from_cached(value: CachedValue) -> Option<Self>;
}

impl Cacheable for Student {
    fn into_cached(self) -> CachedValue {
        CachedValue::Student(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Student(student) => Some(student),
            _ => None,
        }
    }
}

impl Cacheable for Classroom {
    fn into_cached(self) -> CachedValue {
        CachedValue::Classroom(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Classroom(classroom) => Some(classroom),
            _ => None,
        }
    }
}

impl Cacheable for Vec<Student> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Students(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Students(students) => Some(students),
            _ => None,
        }
    }
}

impl Cacheable for Vec<Classroom> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Classrooms(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Classrooms(classrooms) => Some(classrooms),
            _ => None,
        }
    }
}

// == Cache Entry ==
/// A cached value and when it was computed.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: CachedValue,
    /// Population timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(value: CachedValue) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds since the entry was populated.
    pub fn age_ms(&self) -> i64 {
        (current_timestamp_ms() - self.created_at).max(0)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

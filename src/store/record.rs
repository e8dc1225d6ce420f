//! Record Module
//!
//! Defines the two persisted record types and their key types.

use serde::{Deserialize, Serialize};

/// System-assigned student identity.
pub type StudentId = u64;

// == Student ==
/// A student record. Enrollments live in the edge table, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Assigned by the store on creation, immutable afterwards
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    /// Creates a student record with the given identity.
    pub fn new(id: StudentId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

// == Classroom ==
/// A classroom record keyed by its caller-supplied code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    /// Primary key, e.g. "INF-102"
    pub code: String,
    pub title: String,
    pub description: String,
}

impl Classroom {
    /// Creates a classroom record.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

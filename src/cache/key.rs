//! Cache Key Module
//!
//! Cache keys are an operation (the region) plus its ordered argument tuple.

use std::fmt;

use crate::query::{ClassroomFilter, StudentFilter};
use crate::store::StudentId;

// == Cache Region ==
/// One region per cached read operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheRegion {
    /// `get_student(id)`
    StudentById,
    /// `search_students(first_name?, last_name?)`
    StudentSearch,
    /// `classrooms_of(id)`
    StudentClassrooms,
    /// `get_classroom(code)`
    ClassroomByCode,
    /// `search_classrooms(title?, description?)`
    ClassroomSearch,
    /// `roster_of(code)`
    ClassroomRoster,
}

impl CacheRegion {
    /// Every region, in declaration order.
    pub const ALL: [CacheRegion; 6] = [
        CacheRegion::StudentById,
        CacheRegion::StudentSearch,
        CacheRegion::StudentClassrooms,
        CacheRegion::ClassroomByCode,
        CacheRegion::ClassroomSearch,
        CacheRegion::ClassroomRoster,
    ];

    /// Operation name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            CacheRegion::StudentById => "student_by_id",
            CacheRegion::StudentSearch => "student_search",
            CacheRegion::StudentClassrooms => "student_classrooms",
            CacheRegion::ClassroomByCode => "classroom_by_code",
            CacheRegion::ClassroomSearch => "classroom_search",
            CacheRegion::ClassroomRoster => "classroom_roster",
        }
    }
}

impl fmt::Display for CacheRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// == Cache Key ==
/// Region plus the full argument tuple of the call.
///
/// Absent optional arguments are kept as `None` in their position, so
/// `(Some("a"), None)` and `(None, Some("a"))` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub region: CacheRegion,
    pub args: Vec<Option<String>>,
}

impl CacheKey {
    pub fn new(region: CacheRegion, args: Vec<Option<String>>) -> Self {
        Self { region, args }
    }

    pub fn student(id: StudentId) -> Self {
        Self::new(CacheRegion::StudentById, vec![Some(id.to_string())])
    }

    pub fn student_search(filter: &StudentFilter) -> Self {
        Self::new(
            CacheRegion::StudentSearch,
            vec![filter.first_name.clone(), filter.last_name.clone()],
        )
    }

    pub fn classrooms_of(id: StudentId) -> Self {
        Self::new(CacheRegion::StudentClassrooms, vec![Some(id.to_string())])
    }

    pub fn classroom(code: &str) -> Self {
        Self::new(CacheRegion::ClassroomByCode, vec![Some(code.to_string())])
    }

    pub fn classroom_search(filter: &ClassroomFilter) -> Self {
        Self::new(
            CacheRegion::ClassroomSearch,
            vec![filter.title.clone(), filter.description.clone()],
        )
    }

    pub fn roster_of(code: &str) -> Self {
        Self::new(CacheRegion::ClassroomRoster, vec![Some(code.to_string())])
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<&str> = self
            .args
            .iter()
            .map(|arg| arg.as_deref().unwrap_or("_"))
            .collect();
        write!(f, "{}({})", self.region, args.join(", "))
    }
}

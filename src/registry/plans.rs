//! Invalidation rules per mutation.
//!
//! Each function names everything whose cached result could differ after the
//! mutation. Search regions are dropped wholesale because any record change
//! can move a record into or out of any filter.

use crate::cache::{CacheKey, CacheRegion, Invalidation};
use crate::store::StudentId;

pub fn student_created(id: StudentId) -> Invalidation {
    Invalidation::new()
        .key(CacheKey::student(id))
        .region(CacheRegion::StudentSearch)
}

/// Rosters embed student records, so those of the student's classrooms go too.
pub fn student_updated(id: StudentId, classrooms: &[String]) -> Invalidation {
    Invalidation::new()
        .key(CacheKey::student(id))
        .region(CacheRegion::StudentSearch)
        .keys(classrooms.iter().map(|code| CacheKey::roster_of(code)))
}

pub fn student_deleted(id: StudentId, classrooms: &[String]) -> Invalidation {
    student_updated(id, classrooms).key(CacheKey::classrooms_of(id))
}

pub fn classroom_created(code: &str) -> Invalidation {
    Invalidation::new()
        .key(CacheKey::classroom(code))
        .region(CacheRegion::ClassroomSearch)
}

/// Student classroom lists embed classroom records, so enrolled students' go too.
pub fn classroom_updated(code: &str, students: &[StudentId]) -> Invalidation {
    Invalidation::new()
        .key(CacheKey::classroom(code))
        .region(CacheRegion::ClassroomSearch)
        .keys(students.iter().map(|id| CacheKey::classrooms_of(*id)))
}

pub fn classroom_deleted(code: &str, students: &[StudentId]) -> Invalidation {
    classroom_updated(code, students).key(CacheKey::roster_of(code))
}

pub fn enrollment_changed(id: StudentId, code: &str) -> Invalidation {
    Invalidation::new()
        .key(CacheKey::classrooms_of(id))
        .key(CacheKey::roster_of(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ClassroomFilter, StudentFilter};

    fn any_student_search() -> CacheKey {
        CacheKey::student_search(&StudentFilter::new(Some("jor"), None))
    }

    fn any_classroom_search() -> CacheKey {
        CacheKey::classroom_search(&ClassroomFilter::default())
    }

    #[test]
    fn test_student_deleted_covers_related_rosters() {
        let plan = student_deleted(1, &["INF-102".to_string(), "INF-103".to_string()]);

        assert!(plan.covers(&CacheKey::student(1)));
        assert!(plan.covers(&CacheKey::classrooms_of(1)));
        assert!(plan.covers(&CacheKey::roster_of("INF-102")));
        assert!(plan.covers(&CacheKey::roster_of("INF-103")));
        assert!(plan.covers(&any_student_search()));
        assert!(!plan.covers(&CacheKey::student(2)));
        assert!(!plan.covers(&CacheKey::roster_of("INF-104")));
    }

    #[test]
    fn test_classroom_deleted_covers_related_students() {
        let plan = classroom_deleted("INF-102", &[1, 2]);

        assert!(plan.covers(&CacheKey::classroom("INF-102")));
        assert!(plan.covers(&CacheKey::roster_of("INF-102")));
        assert!(plan.covers(&CacheKey::classrooms_of(1)));
        assert!(plan.covers(&CacheKey::classrooms_of(2)));
        assert!(plan.covers(&any_classroom_search()));
        assert!(!plan.covers(&CacheKey::student(1)));
    }

    #[test]
    fn test_enrollment_changed_leaves_records_and_searches() {
        let plan = enrollment_changed(1, "INF-102");

        assert!(plan.covers(&CacheKey::classrooms_of(1)));
        assert!(plan.covers(&CacheKey::roster_of("INF-102")));
        assert!(!plan.covers(&any_student_search()));
        assert!(!plan.covers(&any_classroom_search()));
        assert!(!plan.covers(&CacheKey::student(1)));
        assert!(!plan.covers(&CacheKey::classroom("INF-102")));
    }

    #[test]
    fn test_created_plans_drop_search_region() {
        assert!(student_created(3).covers(&any_student_search()));
        assert!(!student_created(3).covers(&any_classroom_search()));
        assert!(classroom_created("X").covers(&any_classroom_search()));
    }
}

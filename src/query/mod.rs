//! Query Engine
//!
//! Point lookups and filtered scans over the entity store. Results always
//! come back in the store's insertion order.

mod filter;

pub use filter::{contains_ignore_case, ClassroomFilter, StudentFilter};

use crate::store::{Classroom, EntityStore, Student, StudentId};

// == Point Lookups ==
/// Exact lookup by student id.
pub fn find_student(store: &EntityStore, id: StudentId) -> Option<Student> {
    store.students().get(&id).cloned()
}

/// Exact lookup by classroom code.
pub fn find_classroom(store: &EntityStore, code: &str) -> Option<Classroom> {
    store.classrooms().get(&code.to_string()).cloned()
}

// == Searches ==
/// Students matching every supplied field of `filter`.
pub fn search_students(store: &EntityStore, filter: &StudentFilter) -> Vec<Student> {
    store
        .students()
        .scan(|student| filter.matches(student))
        .into_iter()
        .cloned()
        .collect()
}

/// Classrooms matching every supplied field of `filter`.
pub fn search_classrooms(store: &EntityStore, filter: &ClassroomFilter) -> Vec<Classroom> {
    store
        .classrooms()
        .scan(|classroom| filter.matches(classroom))
        .into_iter()
        .cloned()
        .collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> EntityStore {
        let mut store = EntityStore::new();
        store.create_student("Jorge", "Vasquez");
        store.create_student("Maria", "Lopez");
        store.create_student("Jorge", "Lopez");
        for classroom in [
            Classroom::new("INF-102", "ProgramacionI", "Programacion1"),
            Classroom::new("INF-103", "ProgramacionII", "Programacion2"),
        ] {
            store.classrooms_mut().put(classroom.code.clone(), classroom);
        }
        store
    }

    fn ids(students: &[Student]) -> Vec<StudentId> {
        students.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_find_student() {
        let store = seeded_store();

        assert_eq!(find_student(&store, 2).unwrap().first_name, "Maria");
        assert!(find_student(&store, 99).is_none());
    }

    #[test]
    fn test_find_classroom() {
        let store = seeded_store();

        assert_eq!(find_classroom(&store, "INF-103").unwrap().title, "ProgramacionII");
        assert!(find_classroom(&store, "inf-103").is_none());
    }

    #[test]
    fn test_search_students_unrestricted() {
        let store = seeded_store();
        let all = search_students(&store, &StudentFilter::default());
        assert_eq!(ids(&all), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_students_by_first_name() {
        let store = seeded_store();
        let found = search_students(&store, &StudentFilter::new(Some("jorge"), None));
        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[test]
    fn test_search_students_by_last_name() {
        let store = seeded_store();
        let found = search_students(&store, &StudentFilter::new(None, Some("LOPEZ")));
        assert_eq!(ids(&found), vec![2, 3]);
    }

    #[test]
    fn test_search_students_by_both_names() {
        let store = seeded_store();
        let found = search_students(&store, &StudentFilter::new(Some("jorge"), Some("lopez")));
        assert_eq!(ids(&found), vec![3]);
    }

    #[test]
    fn test_search_classrooms_by_title_substring() {
        let store = seeded_store();

        let found = search_classrooms(&store, &ClassroomFilter::new(Some("programacioni"), None));
        let codes: Vec<&str> = found.iter().map(|c| c.code.as_str()).collect();

        // "programacioni" is contained in both titles
        assert_eq!(codes, vec!["INF-102", "INF-103"]);
    }

    #[test]
    fn test_search_classrooms_by_title_and_description() {
        let store = seeded_store();

        let found = search_classrooms(
            &store,
            &ClassroomFilter::new(Some("programacioni"), Some("programacion1")),
        );

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "INF-102");
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let store = seeded_store();
        assert!(search_students(&store, &StudentFilter::new(Some("zzz"), None)).is_empty());
    }
}

//! Search Filters
//!
//! Optional per-field predicates for student and classroom searches.
//! Supplied fields combine with AND; an empty filter matches everything.

use serde::Deserialize;

use crate::store::{Classroom, Student};

/// Case-insensitive containment test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Matches when the field is unconstrained or contains the needle.
fn field_matches(value: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |needle| contains_ignore_case(value, needle))
}

// == Student Filter ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFilter {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl StudentFilter {
    pub fn new(first_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }

    pub fn matches(&self, student: &Student) -> bool {
        field_matches(&student.first_name, self.first_name.as_deref())
            && field_matches(&student.last_name, self.last_name.as_deref())
    }
}

// == Classroom Filter ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ClassroomFilter {
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    pub fn matches(&self, classroom: &Classroom) -> bool {
        field_matches(&classroom.title, self.title.as_deref())
            && field_matches(&classroom.description, self.description.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Jorge", "jorge"));
        assert!(contains_ignore_case("JORGE", "org"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Maria", "jorge"));
    }

    #[test]
    fn test_empty_student_filter_matches_all() {
        let filter = StudentFilter::default();
        assert!(filter.matches(&Student::new(1, "Jorge", "Vasquez")));
    }

    #[test]
    fn test_student_filter_is_conjunction() {
        let filter = StudentFilter::new(Some("jorge"), Some("lopez"));

        assert!(filter.matches(&Student::new(3, "Jorge", "Lopez")));
        assert!(!filter.matches(&Student::new(1, "Jorge", "Vasquez")));
        assert!(!filter.matches(&Student::new(2, "Maria", "Lopez")));
    }

    #[test]
    fn test_classroom_filter_single_field() {
        let filter = ClassroomFilter::new(None, Some("programacion1"));

        assert!(filter.matches(&Classroom::new("INF-102", "ProgramacionI", "Programacion1")));
        assert!(!filter.matches(&Classroom::new("INF-103", "ProgramacionII", "Programacion2")));
    }

    #[test]
    fn test_filter_deserializes_missing_fields_as_none() {
        let filter: StudentFilter = serde_json::from_str(r#"{"lastName":"lopez"}"#).unwrap();
        assert_eq!(filter, StudentFilter::new(None, Some("lopez")));
    }
}

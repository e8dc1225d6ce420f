//! Enrollment Module
//!
//! The student/classroom relation, stored once and indexed from both sides.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use crate::store::StudentId;

// == Enrollment Table ==
/// Edge set for the many-to-many enrollment relation.
///
/// Each `(student, classroom)` pair is stored exactly once under an insertion
/// sequence number. Per-side indexes hold the sequence numbers so that both
/// traversals come back in enrollment order.
#[derive(Debug, Default)]
pub struct EnrollmentTable {
    edges: BTreeMap<u64, (StudentId, String)>,
    pairs: HashMap<(StudentId, String), u64>,
    by_student: HashMap<StudentId, BTreeSet<u64>>,
    by_classroom: HashMap<String, BTreeSet<u64>>,
    next_seq: u64,
}

impl EnrollmentTable {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Adds the edge. Returns false if it already existed.
    pub fn insert(&mut self, student: StudentId, classroom: &str) -> bool {
        let pair = (student, classroom.to_string());
        if self.pairs.contains_key(&pair) {
            return false;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_student.entry(student).or_default().insert(seq);
        self.by_classroom
            .entry(classroom.to_string())
            .or_default()
            .insert(seq);
        self.edges.insert(seq, pair.clone());
        self.pairs.insert(pair, seq);
        true
    }

    // == Remove ==
    /// Removes the edge. Returns false if it was not present.
    pub fn remove(&mut self, student: StudentId, classroom: &str) -> bool {
        let pair = (student, classroom.to_string());
        let Some(seq) = self.pairs.remove(&pair) else {
            return false;
        };

        self.edges.remove(&seq);
        detach(&mut self.by_student, &student, seq);
        detach(&mut self.by_classroom, classroom, seq);
        true
    }

    // == Classrooms Of ==
    /// Codes of the classrooms `student` is enrolled in, in enrollment order.
    pub fn classrooms_of(&self, student: StudentId) -> Vec<String> {
        self.by_student
            .get(&student)
            .map(|seqs| {
                seqs.iter()
                    .filter_map(|seq| self.edges.get(seq))
                    .map(|(_, code)| code.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // == Students Of ==
    /// Ids of the students enrolled in `classroom`, in enrollment order.
    pub fn students_of(&self, classroom: &str) -> Vec<StudentId> {
        self.by_classroom
            .get(classroom)
            .map(|seqs| {
                seqs.iter()
                    .filter_map(|seq| self.edges.get(seq))
                    .map(|(id, _)| *id)
                    .collect()
            })
            .unwrap_or_default()
    }

    // == Remove Student ==
    /// Drops every edge touching `student`, returning the classroom codes it had.
    pub fn remove_student(&mut self, student: StudentId) -> Vec<String> {
        let codes = self.classrooms_of(student);
        for code in &codes {
            self.remove(student, code);
        }
        codes
    }

    // == Remove Classroom ==
    /// Drops every edge touching `classroom`, returning the student ids it had.
    pub fn remove_classroom(&mut self, classroom: &str) -> Vec<StudentId> {
        let ids = self.students_of(classroom);
        for id in &ids {
            self.remove(*id, classroom);
        }
        ids
    }

    // == Length ==
    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Removes `seq` from the index bucket for `key`, dropping empty buckets.
fn detach<K, B>(index: &mut HashMap<K, BTreeSet<u64>>, key: &B, seq: u64)
where
    K: Borrow<B> + Hash + Eq,
    B: Hash + Eq + ?Sized,
{
    if let Some(bucket) = index.get_mut(key) {
        bucket.remove(&seq);
        if bucket.is_empty() {
            index.remove(key);
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut table = EnrollmentTable::new();

        assert!(table.insert(1, "INF-102"));
        assert!(!table.insert(1, "INF-102"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.classrooms_of(1), vec!["INF-102".to_string()]);
        assert_eq!(table.students_of("INF-102"), vec![1]);
    }

    #[test]
    fn test_remove_missing_edge_is_noop() {
        let mut table = EnrollmentTable::new();
        table.insert(1, "INF-102");

        assert!(!table.remove(2, "INF-102"));
        assert!(!table.remove(1, "INF-103"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_both_sides_in_enrollment_order() {
        let mut table = EnrollmentTable::new();
        table.insert(1, "INF-103");
        table.insert(1, "INF-102");
        table.insert(2, "INF-102");

        assert_eq!(
            table.classrooms_of(1),
            vec!["INF-103".to_string(), "INF-102".to_string()]
        );
        assert_eq!(table.students_of("INF-102"), vec![1, 2]);
    }

    #[test]
    fn test_remove_student_cascades() {
        let mut table = EnrollmentTable::new();
        table.insert(1, "INF-102");
        table.insert(1, "INF-103");
        table.insert(2, "INF-102");

        let removed = table.remove_student(1);

        assert_eq!(removed, vec!["INF-102".to_string(), "INF-103".to_string()]);
        assert!(table.classrooms_of(1).is_empty());
        assert_eq!(table.students_of("INF-102"), vec![2]);
        assert!(table.students_of("INF-103").is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_classroom_cascades() {
        let mut table = EnrollmentTable::new();
        table.insert(1, "INF-102");
        table.insert(2, "INF-102");
        table.insert(2, "INF-103");

        let removed = table.remove_classroom("INF-102");

        assert_eq!(removed, vec![1, 2]);
        assert!(table.classrooms_of(1).is_empty());
        assert_eq!(table.classrooms_of(2), vec!["INF-103".to_string()]);
        assert!(table.students_of("INF-102").is_empty());
    }

    #[test]
    fn test_reenroll_after_remove_moves_to_end() {
        let mut table = EnrollmentTable::new();
        table.insert(1, "A");
        table.insert(1, "B");
        table.remove(1, "A");
        table.insert(1, "A");

        assert_eq!(table.classrooms_of(1), vec!["B".to_string(), "A".to_string()]);
    }
}

//! Entity Store Module
//!
//! Keyed storage for student and classroom records plus the enrollment
//! relation between them.

mod enrollment;
mod record;
mod table;

pub use enrollment::EnrollmentTable;
pub use record::{Classroom, Student, StudentId};
pub use table::Table;

use std::sync::Arc;

use tokio::sync::RwLock;

/// Store handle shared by the registry and whoever else needs it.
pub type SharedStore = Arc<RwLock<EntityStore>>;

// == Entity Store ==
/// All persisted state: both record tables, the edge table and the id sequence.
///
/// The store enforces no cross-table rules; referential integrity of
/// enrollments is the relationship manager's job.
#[derive(Debug)]
pub struct EntityStore {
    students: Table<StudentId, Student>,
    classrooms: Table<String, Classroom>,
    enrollments: EnrollmentTable,
    /// Next id handed out by `create_student`
    next_student_id: StudentId,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self {
            students: Table::new(),
            classrooms: Table::new(),
            enrollments: EnrollmentTable::new(),
            next_student_id: 1,
        }
    }
}

impl EntityStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh store in the shared handle type.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    // == Create Student ==
    /// Assigns the next id and stores the student.
    ///
    /// Ids start at 1 and are never reused, even after deletion.
    pub fn create_student(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Student {
        let id = self.next_student_id;
        self.next_student_id += 1;

        let student = Student::new(id, first_name, last_name);
        self.students.put(id, student.clone());
        student
    }

    // == Accessors ==
    pub fn students(&self) -> &Table<StudentId, Student> {
        &self.students
    }

    pub fn students_mut(&mut self) -> &mut Table<StudentId, Student> {
        &mut self.students
    }

    pub fn classrooms(&self) -> &Table<String, Classroom> {
        &self.classrooms
    }

    pub fn classrooms_mut(&mut self) -> &mut Table<String, Classroom> {
        &mut self.classrooms
    }

    pub fn enrollments(&self) -> &EnrollmentTable {
        &self.enrollments
    }

    pub fn enrollments_mut(&mut self) -> &mut EnrollmentTable {
        &mut self.enrollments
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_ids_start_at_one() {
        let mut store = EntityStore::new();

        let first = store.create_student("Jorge", "Vasquez");
        let second = store.create_student("Maria", "Lopez");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.students().get(&1), Some(&first));
    }

    #[test]
    fn test_student_ids_not_reused_after_delete() {
        let mut store = EntityStore::new();
        let first = store.create_student("Jorge", "Vasquez");
        store.students_mut().delete(&first.id);

        let next = store.create_student("Maria", "Lopez");
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_classroom_table_upsert() {
        let mut store = EntityStore::new();
        let code = "INF-102".to_string();

        store
            .classrooms_mut()
            .put(code.clone(), Classroom::new("INF-102", "ProgramacionI", "Programacion1"));
        store
            .classrooms_mut()
            .put(code.clone(), Classroom::new("INF-102", "ProgramacionII", "Programacion2"));

        assert_eq!(store.classrooms().len(), 1);
        assert_eq!(store.classrooms().get(&code).unwrap().title, "ProgramacionII");
    }
}

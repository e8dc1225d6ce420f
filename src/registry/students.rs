//! Student operations, including enrollment.

use tracing::info;

use super::{plans, Registry};
use crate::cache::CacheKey;
use crate::error::{RegistryError, Result};
use crate::query::{self, StudentFilter};
use crate::relations;
use crate::store::{Classroom, Student, StudentId};

impl Registry {
    // == Create Student ==
    /// Stores a new student under the next free id.
    pub async fn create_student(&self, first_name: &str, last_name: &str) -> Result<Student> {
        let student = self
            .write_invalidate(|store| {
                let student = store.create_student(first_name, last_name);
                let plan = plans::student_created(student.id);
                Ok((student, plan))
            })
            .await?;

        info!("Created student {}", student.id);
        Ok(student)
    }

    // == Get Student ==
    pub async fn get_student(&self, id: StudentId) -> Result<Student> {
        self.read_through(CacheKey::student(id), |store| {
            query::find_student(store, id).ok_or(RegistryError::StudentNotFound(id))
        })
        .await
    }

    // == Search Students ==
    /// Students matching every supplied name fragment, case-insensitively.
    pub async fn search_students(&self, filter: &StudentFilter) -> Result<Vec<Student>> {
        self.read_through(CacheKey::student_search(filter), |store| {
            Ok(query::search_students(store, filter))
        })
        .await
    }

    // == Update Student ==
    /// Replaces both names of an existing student.
    pub async fn update_student(
        &self,
        id: StudentId,
        first_name: &str,
        last_name: &str,
    ) -> Result<Student> {
        self.write_invalidate(|store| {
            if !store.students().contains(&id) {
                return Err(RegistryError::StudentNotFound(id));
            }
            let student = Student::new(id, first_name, last_name);
            store.students_mut().put(id, student.clone());

            let classrooms = store.enrollments().classrooms_of(id);
            Ok((student, plans::student_updated(id, &classrooms)))
        })
        .await
    }

    // == Delete Student ==
    /// Removes a student and all of its enrollments.
    pub async fn delete_student(&self, id: StudentId) -> Result<()> {
        self.write_invalidate(|store| {
            let classrooms = relations::remove_student(store, id)?;
            Ok(((), plans::student_deleted(id, &classrooms)))
        })
        .await?;

        info!("Deleted student {}", id);
        Ok(())
    }

    // == Classrooms Of ==
    pub async fn classrooms_of(&self, id: StudentId) -> Result<Vec<Classroom>> {
        self.read_through(CacheKey::classrooms_of(id), |store| {
            relations::classrooms_of(store, id)
        })
        .await
    }

    // == Enroll ==
    /// Enrolls the student in the classroom. Returns false if already enrolled.
    pub async fn enroll_student(&self, id: StudentId, code: &str) -> Result<bool> {
        self.write_invalidate(|store| {
            let added = relations::enroll(store, id, code)?;
            Ok((added, plans::enrollment_changed(id, code)))
        })
        .await
    }

    /// Enrolls the student and returns it with its classrooms as of that write.
    pub async fn enroll_with_classrooms(
        &self,
        id: StudentId,
        code: &str,
    ) -> Result<(Student, Vec<Classroom>)> {
        self.write_invalidate(|store| {
            relations::enroll(store, id, code)?;
            let student =
                query::find_student(store, id).ok_or(RegistryError::StudentNotFound(id))?;
            let classrooms = relations::classrooms_of(store, id)?;
            Ok(((student, classrooms), plans::enrollment_changed(id, code)))
        })
        .await
    }

    // == Unenroll ==
    /// Removes the enrollment. Returns false if there was none.
    pub async fn unenroll_student(&self, id: StudentId, code: &str) -> Result<bool> {
        self.write_invalidate(|store| {
            let removed = relations::unenroll(store, id, code)?;
            Ok((removed, plans::enrollment_changed(id, code)))
        })
        .await
    }
}

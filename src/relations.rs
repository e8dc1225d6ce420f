//! Relationship Manager
//!
//! Keeps the enrollment relation consistent with the record tables. Every edge
//! written through here references a student and a classroom that exist, and
//! removing either record drops its edges first.
//!
//! When both ends of an operation are missing, the student is reported: the
//! subject is checked before the object.

use crate::error::{RegistryError, Result};
use crate::store::{Classroom, EntityStore, Student, StudentId};

fn require_student(store: &EntityStore, id: StudentId) -> Result<()> {
    if store.students().contains(&id) {
        Ok(())
    } else {
        Err(RegistryError::StudentNotFound(id))
    }
}

fn require_classroom(store: &EntityStore, code: &str) -> Result<()> {
    if store.classrooms().contains(&code.to_string()) {
        Ok(())
    } else {
        Err(RegistryError::ClassroomNotFound(code.to_string()))
    }
}

// == Enroll ==
/// Links a student to a classroom.
///
/// Returns whether a new edge was written; enrolling twice is not an error.
pub fn enroll(store: &mut EntityStore, student: StudentId, classroom: &str) -> Result<bool> {
    require_student(store, student)?;
    require_classroom(store, classroom)?;
    Ok(store.enrollments_mut().insert(student, classroom))
}

// == Unenroll ==
/// Unlinks a student from a classroom.
///
/// Returns whether an edge was removed; a missing edge is not an error.
pub fn unenroll(store: &mut EntityStore, student: StudentId, classroom: &str) -> Result<bool> {
    require_student(store, student)?;
    require_classroom(store, classroom)?;
    Ok(store.enrollments_mut().remove(student, classroom))
}

// == Roster Of ==
/// Students enrolled in `classroom`, in enrollment order.
pub fn roster_of(store: &EntityStore, classroom: &str) -> Result<Vec<Student>> {
    require_classroom(store, classroom)?;
    Ok(store
        .enrollments()
        .students_of(classroom)
        .into_iter()
        .filter_map(|id| store.students().get(&id).cloned())
        .collect())
}

// == Classrooms Of ==
/// Classrooms `student` is enrolled in, in enrollment order.
pub fn classrooms_of(store: &EntityStore, student: StudentId) -> Result<Vec<Classroom>> {
    require_student(store, student)?;
    Ok(store
        .enrollments()
        .classrooms_of(student)
        .into_iter()
        .filter_map(|code| store.classrooms().get(&code).cloned())
        .collect())
}

// == Remove Student ==
/// Deletes a student and every edge that references it.
///
/// Returns the codes of the classrooms the student was enrolled in.
pub fn remove_student(store: &mut EntityStore, student: StudentId) -> Result<Vec<String>> {
    if !store.students().contains(&student) {
        return Err(RegistryError::NothingToDelete);
    }
    let codes = store.enrollments_mut().remove_student(student);
    store.students_mut().delete(&student);
    Ok(codes)
}

// == Remove Classroom ==
/// Deletes a classroom and every edge that references it.
///
/// Returns the ids of the students that were enrolled in it.
pub fn remove_classroom(store: &mut EntityStore, classroom: &str) -> Result<Vec<StudentId>> {
    let code = classroom.to_string();
    if !store.classrooms().contains(&code) {
        return Err(RegistryError::NothingToDelete);
    }
    let ids = store.enrollments_mut().remove_classroom(classroom);
    store.classrooms_mut().delete(&code);
    Ok(ids)
}

//! Request DTOs for the registry API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::store::StudentId;

/// Request body for creating a student (POST /students)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
}

impl CreateStudentRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_names(&self.first_name, &self.last_name)
    }
}

/// Request body for updating a student (PUT /students)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
}

impl UpdateStudentRequest {
    pub fn validate(&self) -> Option<String> {
        validate_names(&self.first_name, &self.last_name)
    }
}

/// Request body for creating or updating a classroom (POST/PUT /classes)
#[derive(Debug, Clone, Deserialize)]
pub struct ClassroomRequest {
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ClassroomRequest {
    pub fn validate(&self) -> Option<String> {
        if self.code.trim().is_empty() {
            return Some("Classroom code cannot be empty".to_string());
        }
        None
    }
}

/// Query string carrying a student id (`?id=`)
#[derive(Debug, Clone, Deserialize)]
pub struct StudentIdParams {
    pub id: StudentId,
}

/// Query string carrying a classroom code (`?code=`)
#[derive(Debug, Clone, Deserialize)]
pub struct ClassroomCodeParams {
    pub code: String,
}

fn validate_names(first_name: &str, last_name: &str) -> Option<String> {
    if first_name.trim().is_empty() {
        return Some("First name cannot be empty".to_string());
    }
    if last_name.trim().is_empty() {
        return Some("Last name cannot be empty".to_string());
    }
    None
}

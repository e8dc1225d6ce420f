//! Error types for the registry
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::models::ErrorResponse;
use crate::store::StudentId;

/// Reason sent with 404s for unknown students.
pub const STUDENT_NOT_FOUND_REASON: &str = "The student was not found in the system";
/// Reason sent with 404s for unknown classrooms.
pub const CLASSROOM_NOT_FOUND_REASON: &str = "The classroom was not found in the system";
/// Reason logged when a delete targets a missing record.
pub const DELETE_ERROR_REASON: &str = "There is no item to delete";
/// Reason sent with malformed requests.
pub const INVALID_REQUEST_REASON: &str = "The request is invalid";

// == Registry Error Enum ==
/// Errors surfaced to callers of the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No student with this id
    #[error("Record for student with id {0} not found")]
    StudentNotFound(StudentId),

    /// No classroom with this code
    #[error("Record for classroom with code {0} not found")]
    ClassroomNotFound(String),

    /// Delete targeted a record that does not exist
    #[error("Nothing to delete")]
    NothingToDelete,

    /// Create targeted a classroom code that is already taken
    #[error("Classroom with code {0} already exists")]
    AlreadyExists(String),

    /// Request failed validation at the HTTP boundary
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == Cache Error Enum ==
/// Failures inside the cache layer. Never shown to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No room for a new entry and nothing to evict (capacity 0)
    #[error("Cache full: capacity is {0}")]
    Full(usize),
}

// == IntoResponse Implementation ==
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        warn!("{}", self);

        let (status, message) = match &self {
            RegistryError::StudentNotFound(_) => {
                (StatusCode::NOT_FOUND, STUDENT_NOT_FOUND_REASON.to_string())
            }
            RegistryError::ClassroomNotFound(_) => {
                (StatusCode::NOT_FOUND, CLASSROOM_NOT_FOUND_REASON.to_string())
            }
            // 204 carries no body
            RegistryError::NothingToDelete => return StatusCode::NO_CONTENT.into_response(),
            RegistryError::AlreadyExists(_) => (StatusCode::CONFLICT, self.to_string()),
            RegistryError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, INVALID_REQUEST_REASON.to_string())
            }
            RegistryError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the registry.
pub type Result<T> = std::result::Result<T, RegistryError>;

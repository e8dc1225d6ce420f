//! Request and Response models for the registry API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    ClassroomCodeParams, ClassroomRequest, CreateStudentRequest, StudentIdParams,
    UpdateStudentRequest,
};
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, StatsResponse, StudentResponse,
    UnenrollResponse,
};

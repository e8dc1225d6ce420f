//! API Handlers
//!
//! HTTP request handlers for the student, classroom and operational endpoints.
//! Handlers validate their input and delegate to the [`Registry`].

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::models::{
    ClassroomCodeParams, ClassroomRequest, CreateStudentRequest, DeleteResponse, HealthResponse,
    StatsResponse, StudentIdParams, StudentResponse, UnenrollResponse, UpdateStudentRequest,
};
use crate::query::{ClassroomFilter, StudentFilter};
use crate::registry::Registry;
use crate::store::{Classroom, Student, StudentId};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Creates a new AppState with an empty registry sized from the Config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Registry::from_config(config))
    }
}

// == Students ==

/// Handler for POST /students
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<Json<Student>> {
    if let Some(error_msg) = req.validate() {
        return Err(RegistryError::InvalidRequest(error_msg));
    }

    let student = state
        .registry
        .create_student(&req.first_name, &req.last_name)
        .await?;
    Ok(Json(student))
}

/// Handler for PUT /students
pub async fn update_student_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<Student>> {
    if let Some(error_msg) = req.validate() {
        return Err(RegistryError::InvalidRequest(error_msg));
    }

    let student = state
        .registry
        .update_student(req.id, &req.first_name, &req.last_name)
        .await?;
    Ok(Json(student))
}

/// Handler for GET /students?id=
///
/// Returns the student along with its classrooms.
pub async fn get_student_handler(
    State(state): State<AppState>,
    Query(params): Query<StudentIdParams>,
) -> Result<Json<StudentResponse>> {
    student_with_classrooms(&state.registry, params.id).await
}

/// Handler for DELETE /students?id=
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Query(params): Query<StudentIdParams>,
) -> Result<Json<DeleteResponse>> {
    state.registry.delete_student(params.id).await?;
    Ok(Json(DeleteResponse::student(params.id)))
}

/// Handler for GET /students/search?firstName=&lastName=
pub async fn search_students_handler(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<Json<Vec<Student>>> {
    Ok(Json(state.registry.search_students(&filter).await?))
}

/// Handler for GET /students/classes?id=
pub async fn student_classrooms_handler(
    State(state): State<AppState>,
    Query(params): Query<StudentIdParams>,
) -> Result<Json<Vec<Classroom>>> {
    Ok(Json(state.registry.classrooms_of(params.id).await?))
}

/// Handler for POST /students/:id/class/:code
///
/// The returned classrooms are read under the same write as the enrollment.
pub async fn enroll_handler(
    State(state): State<AppState>,
    Path((id, code)): Path<(StudentId, String)>,
) -> Result<Json<StudentResponse>> {
    let (student, classrooms) = state.registry.enroll_with_classrooms(id, &code).await?;
    Ok(Json(StudentResponse::new(student, classrooms)))
}

/// Handler for DELETE /students/:id/class/:code
pub async fn unenroll_handler(
    State(state): State<AppState>,
    Path((id, code)): Path<(StudentId, String)>,
) -> Result<Json<UnenrollResponse>> {
    let removed = state.registry.unenroll_student(id, &code).await?;
    Ok(Json(UnenrollResponse::new(id, code, removed)))
}

async fn student_with_classrooms(
    registry: &Registry,
    id: StudentId,
) -> Result<Json<StudentResponse>> {
    let student = registry.get_student(id).await?;
    let classrooms = registry.classrooms_of(id).await?;
    Ok(Json(StudentResponse::new(student, classrooms)))
}

// == Classrooms ==

/// Handler for POST /classes
pub async fn create_classroom_handler(
    State(state): State<AppState>,
    Json(req): Json<ClassroomRequest>,
) -> Result<Json<Classroom>> {
    if let Some(error_msg) = req.validate() {
        return Err(RegistryError::InvalidRequest(error_msg));
    }

    let classroom = state
        .registry
        .create_classroom(&req.code, &req.title, &req.description)
        .await?;
    Ok(Json(classroom))
}

/// Handler for PUT /classes
pub async fn update_classroom_handler(
    State(state): State<AppState>,
    Json(req): Json<ClassroomRequest>,
) -> Result<Json<Classroom>> {
    if let Some(error_msg) = req.validate() {
        return Err(RegistryError::InvalidRequest(error_msg));
    }

    let classroom = state
        .registry
        .update_classroom(&req.code, &req.title, &req.description)
        .await?;
    Ok(Json(classroom))
}

/// Handler for GET /classes?code=
pub async fn get_classroom_handler(
    State(state): State<AppState>,
    Query(params): Query<ClassroomCodeParams>,
) -> Result<Json<Classroom>> {
    Ok(Json(state.registry.get_classroom(&params.code).await?))
}

/// Handler for DELETE /classes?code=
pub async fn delete_classroom_handler(
    State(state): State<AppState>,
    Query(params): Query<ClassroomCodeParams>,
) -> Result<Json<DeleteResponse>> {
    state.registry.delete_classroom(&params.code).await?;
    Ok(Json(DeleteResponse::classroom(&params.code)))
}

/// Handler for GET /classes/search?title=&description=
pub async fn search_classrooms_handler(
    State(state): State<AppState>,
    Query(filter): Query<ClassroomFilter>,
) -> Result<Json<Vec<Classroom>>> {
    Ok(Json(state.registry.search_classrooms(&filter).await?))
}

/// Handler for GET /classes/students?code=
pub async fn classroom_students_handler(
    State(state): State<AppState>,
    Query(params): Query<ClassroomCodeParams>,
) -> Result<Json<Vec<Student>>> {
    Ok(Json(state.registry.roster_of(&params.code).await?))
}

// == Operational ==

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.registry.cache_stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

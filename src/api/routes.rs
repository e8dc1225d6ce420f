//! API Routes
//!
//! Configures the Axum router with all registry endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    classroom_students_handler, create_classroom_handler, create_student_handler,
    delete_classroom_handler, delete_student_handler, enroll_handler, get_classroom_handler,
    get_student_handler, health_handler, search_classrooms_handler, search_students_handler,
    stats_handler, student_classrooms_handler, unenroll_handler, update_classroom_handler,
    update_student_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST|PUT|GET|DELETE /students` - Student CRUD (`?id=` for get/delete)
/// - `GET /students/search` - Search by `firstName` / `lastName`
/// - `GET /students/classes?id=` - Classrooms of a student
/// - `POST|DELETE /students/:id/class/:code` - Enroll / unenroll
/// - `POST|PUT|GET|DELETE /classes` - Classroom CRUD (`?code=` for get/delete)
/// - `GET /classes/search` - Search by `title` / `description`
/// - `GET /classes/students?code=` - Roster of a classroom
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/students",
            post(create_student_handler)
                .put(update_student_handler)
                .get(get_student_handler)
                .delete(delete_student_handler),
        )
        .route("/students/search", get(search_students_handler))
        .route("/students/classes", get(student_classrooms_handler))
        .route(
            "/students/:id/class/:code",
            post(enroll_handler).delete(unenroll_handler),
        )
        .route(
            "/classes",
            post(create_classroom_handler)
                .put(update_classroom_handler)
                .get(get_classroom_handler)
                .delete(delete_classroom_handler),
        )
        .route("/classes/search", get(search_classrooms_handler))
        .route("/classes/students", get(classroom_students_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

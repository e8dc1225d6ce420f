//! API Module
//!
//! HTTP handlers and routing for the registry REST API.
//!
//! # Endpoints
//! - `/students` and `/students/...` - Student records, search and enrollment
//! - `/classes` and `/classes/...` - Classroom records, search and rosters
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

//! Student Registry - students, classrooms and enrollments over HTTP
//!
//! Keeps both entity types in memory, answers reads through a result cache
//! and invalidates cached results on every write.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod registry;
pub mod relations;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{RegistryError, Result};
pub use registry::Registry;
pub use tasks::spawn_stats_task;

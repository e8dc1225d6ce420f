//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache stats: Logs result cache statistics at the configured interval

mod report;

pub use report::spawn_stats_task;

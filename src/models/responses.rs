//! Response DTOs for the registry API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::{CacheStats, RegionCounters};
use crate::store::{Classroom, Student, StudentId};

/// A student together with the classrooms it is enrolled in
/// (GET /students, POST /students/:id/class/:code)
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    #[serde(flatten)]
    pub student: Student,
    pub classrooms: Vec<Classroom>,
}

impl StudentResponse {
    pub fn new(student: Student, classrooms: Vec<Classroom>) -> Self {
        Self {
            student,
            classrooms,
        }
    }
}

/// Response body for the delete operations (DELETE /students, DELETE /classes)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
}

impl DeleteResponse {
    pub fn student(id: StudentId) -> Self {
        Self {
            message: format!("Student {} deleted successfully", id),
        }
    }

    pub fn classroom(code: &str) -> Self {
        Self {
            message: format!("Classroom '{}' deleted successfully", code),
        }
    }
}

/// Response body for DELETE /students/:id/class/:code
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnenrollResponse {
    pub student_id: StudentId,
    pub code: String,
    /// False if the student was not enrolled to begin with
    pub removed: bool,
}

impl UnenrollResponse {
    pub fn new(student_id: StudentId, code: impl Into<String>, removed: bool) -> Self {
        Self {
            student_id,
            code: code.into(),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Number of entries dropped by mutations
    pub invalidations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Counters per cached read operation
    pub regions: BTreeMap<&'static str, RegionCounters>,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            regions: stats.regions,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_response_flattens_record() {
        let resp = StudentResponse::new(
            Student::new(1, "Jorge", "Vasquez"),
            vec![Classroom::new("INF-102", "ProgramacionI", "Programacion1")],
        );
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["firstName"], "Jorge");
        assert_eq!(value["lastName"], "Vasquez");
        assert_eq!(value["classrooms"][0]["code"], "INF-102");
    }

    #[test]
    fn test_unenroll_response_serialize() {
        let value = serde_json::to_value(UnenrollResponse::new(1, "INF-102", false)).unwrap();
        assert_eq!(
            value,
            json!({"studentId": 1, "code": "INF-102", "removed": false})
        );
    }

    #[test]
    fn test_delete_response_serialize() {
        let json = serde_json::to_string(&DeleteResponse::classroom("INF-102")).unwrap();
        assert!(json.contains("INF-102"));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            invalidations: 3,
            total_entries: 100,
            ..CacheStats::default()
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.invalidations, 3);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::from(CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}

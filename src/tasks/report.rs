//! Cache Stats Task
//!
//! Background task that periodically logs the result cache statistics.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::registry::Registry;

/// Spawns a background task that logs cache statistics every
/// `interval_secs` seconds.
///
/// Returns `None` without spawning when `interval_secs` is 0. The returned
/// handle should be aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let registry = Registry::from_config(&Config::default());
/// let handle = spawn_stats_task(registry.clone(), 60);
/// // Later, during shutdown:
/// if let Some(handle) = handle {
///     handle.abort();
/// }
/// ```
pub fn spawn_stats_task(registry: Registry, interval_secs: u64) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        return None;
    }
    let interval = Duration::from_secs(interval_secs);

    Some(tokio::spawn(async move {
        info!(
            "Starting cache stats task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let stats = registry.cache_stats().await;
            info!(
                "Cache stats: entries={}, hits={}, misses={}, hit_rate={:.2}, evictions={}, invalidations={}",
                stats.total_entries,
                stats.hits,
                stats.misses,
                stats.hit_rate(),
                stats.evictions,
                stats.invalidations
            );
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_zero_interval_disables_task() {
        let registry = Registry::from_config(&Config::default());
        assert!(spawn_stats_task(registry, 0).is_none());
    }

    #[tokio::test]
    async fn test_stats_task_does_not_hold_locks() {
        let registry = Registry::from_config(&Config::default());
        let handle = spawn_stats_task(registry.clone(), 1).unwrap();

        tokio::time::sleep(Duration::from_millis(1200)).await;

        // The registry stays usable while the reporter runs
        let student = registry.create_student("Jorge", "Vasquez").await.unwrap();
        assert_eq!(registry.get_student(student.id).await.unwrap(), student);

        handle.abort();
    }

    #[tokio::test]
    async fn test_stats_task_can_be_aborted() {
        let registry = Registry::from_config(&Config::default());
        let handle = spawn_stats_task(registry, 1).unwrap();

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}

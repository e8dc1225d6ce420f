//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_MAX_ENTRIES;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached results
    pub cache_max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between cache statistics reports, 0 disables them
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cached results (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STATS_INTERVAL` - Stats report frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            stats_interval: env_or("STATS_INTERVAL", defaults.stats_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max_entries: DEFAULT_MAX_ENTRIES,
            server_port: 3000,
            stats_interval: 60,
        }
    }
}

/// Parses `name` from the environment, keeping `default` if unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

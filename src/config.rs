//! Backend configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Redis connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    /// Connection URL, e.g. `redis://localhost:6379`
    pub url: String,
    /// Timeout for establishing the initial connection
    pub connection_timeout_seconds: u64,
    /// Logical database index, applied at connect time when the URL
    /// does not already select one
    pub database: i64,
}

impl RedisConfig {
    /// Get the connection timeout as a Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_seconds)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connection_timeout_seconds: 5,
            database: 0,
        }
    }
}

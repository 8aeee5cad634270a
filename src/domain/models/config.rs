use serde::{Deserialize, Serialize};

/// Main configuration structure for starport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Rollup job configuration
    #[serde(default)]
    pub rollup: RollupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            rollup: RollupConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".starport/starport.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Maximum number of cached entries
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
}

const fn default_cache_capacity() -> u64 {
    1024
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_cache_capacity(),
        }
    }
}

/// Rollup job configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RollupConfig {
    /// Trailing window in days bounding which trips are aggregated
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Number of top origins/destinations kept in the snapshot
    #[serde(default = "default_rollup_limit")]
    pub limit: usize,

    /// Seconds between scheduled rollup runs
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Whether the daemon runs a rollup immediately on startup
    #[serde(default)]
    pub run_on_startup: bool,

    /// Consecutive failed runs before the daemon gives up
    #[serde(default = "default_max_consecutive_failures")]
    pub max_consecutive_failures: u32,
}

const fn default_window_days() -> i64 {
    5
}

const fn default_rollup_limit() -> usize {
    5
}

const fn default_interval_secs() -> u64 {
    3600
}

const fn default_max_consecutive_failures() -> u32 {
    5
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            limit: default_rollup_limit(),
            interval_secs: default_interval_secs(),
            run_on_startup: false,
            max_consecutive_failures: default_max_consecutive_failures(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::num::NonZeroUsize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener and runtime configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Runtime worker threads; zero is rejected when the file is loaded
    pub workers: Option<NonZeroUsize>,
    /// Where the separately running backend is expected (banner only)
    pub backend_url: String,
}

/// Served directory configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Base directory, relative to the executable's directory unless absolute
    pub root: String,
    pub index_files: Vec<String>,
    pub directory_listing: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

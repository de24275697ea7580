//! Startup error types
//!
//! Everything here is fatal and maps to exit code 1. Per-request failures
//! never surface as `ServerError`; they become HTTP responses.

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Error: {0} directory not found!")]
    MissingRoot(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Process exit code for this failure
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

//! Error handling for the server and CLI front end

use std::fmt;

/// Front-end errors
#[derive(Debug)]
pub enum ServerError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Listener could not be bound
    BindError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::FileNotFound(path) => write!(f, "File not found: {path}"),
            ServerError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            ServerError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            ServerError::BindError(addr) => write!(f, "Failed to bind to {addr}"),
        }
    }
}

impl std::error::Error for ServerError {}

/// Result type alias for front-end operations
pub type ServerResult<T> = Result<T, anyhow::Error>;

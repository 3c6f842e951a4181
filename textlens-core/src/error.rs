//! Error types for configuration and language profile loading
//!
//! Analysis itself never fails; only building an analyzer can.

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid analyzer configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A language profile failed to parse or validate
    #[error("Invalid language profile {source_name}: {reason}")]
    InvalidProfile {
        /// Where the profile came from (built-in code or file path)
        source_name: String,
        /// What was wrong with it
        reason: String,
    },

    /// No profile is registered under this code
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Reading a profile from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

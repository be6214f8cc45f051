//! Error types for coloris

use thiserror::Error;

/// Main error type for coloris operations
#[derive(Error, Debug)]
pub enum ColorisError {
    /// IO error during stream writes or palette file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for coloris operations
pub type Result<T> = std::result::Result<T, ColorisError>;

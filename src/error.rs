//! Error types for reveal-address

use thiserror::Error;

/// Main error type for reveal-address operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Reprojection error: {0}")]
    Reprojection(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for reveal-address operations
pub type Result<T> = std::result::Result<T, Error>;

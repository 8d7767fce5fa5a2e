//! Error types for the gesture catch library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File could not be read or written
    #[error("I/O error: {0}")]
    IoError(String),

    /// Gesture classifier failed on a frame
    #[error("Classifier error: {0}")]
    ClassifierError(String),

    /// Gesture trace could not be read or parsed
    #[error("Trace error: {0}")]
    TraceError(String),

    /// Classifier or capture source is not ready
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Rendering surface has a zero (or non-finite) dimension
    #[error("Invalid geometry: {width}x{height}")]
    InvalidGeometry {
        /// Surface width at the time of the check
        width: f64,
        /// Surface height at the time of the check
        height: f64,
    },
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the Pliant pipeline.
//!
//! All crates return `PliantResult<T>` from fallible operations.
//!
//! The taxonomy mirrors the pipeline stages: import failures reject a
//! single model, topology failures reject a body-creation request before
//! the simulator is touched, and extraction failures indicate a broken
//! invariant in a live body.

use thiserror::Error;

/// Unified error type for the Pliant pipeline.
#[derive(Debug, Error)]
pub enum PliantError {
    /// Asset or submesh data is malformed. Fatal for that model only.
    #[error("Import error: {0}")]
    Import(String),

    /// Topology construction failed. The creation request is rejected
    /// before any simulator mutation occurs.
    #[error("Topology error: {0}")]
    Topology(String),

    /// The live simulator snapshot no longer matches the creation-time
    /// topology. Fatal for that body.
    #[error("State extraction error: {0}")]
    StateExtraction(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Simulator rejected an operation.
    #[error("Simulator error: {0}")]
    Sim(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, PliantError>`.
pub type PliantResult<T> = Result<T, PliantError>;

//! Error types for Tessera.
//!
//! Stream evaluation itself never fails. Everything at the edges
//! (materialising streams, loading plans, file I/O) returns `TesseraResult<T>`.

use thiserror::Error;

/// Unified error type for Tessera.
#[derive(Debug, Error)]
pub enum TesseraError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Merge plan or generator parameter is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A mesh has more vertices than `u32` triangle indices can address.
    #[error("Vertex count {vertex_count} exceeds the u32 index range")]
    IndexOverflow { vertex_count: u64 },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, TesseraError>`.
pub type TesseraResult<T> = Result<T, TesseraError>;

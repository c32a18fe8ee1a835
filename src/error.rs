//! Error types for the plugin.
//!
//! The error surface is deliberately small: generation itself never fails
//! for a structurally valid request, so the only failure points are the
//! plugin protocol envelope (reading, decoding, encoding).

use thiserror::Error;

/// Result type alias for plugin operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for plugin operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error on stdin or stdout.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes on stdin were not a valid `CodeGeneratorRequest`.
    #[error("Failed to decode code generator request: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The response could not be encoded.
    #[error("Failed to encode code generator response: {0}")]
    Encode(#[from] prost::EncodeError),
}

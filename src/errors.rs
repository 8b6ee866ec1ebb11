//! Error types for the diff engine
//!
//! Most of the engine is infallible. Errors only surface at the edges: decoding a
//! stored patch, checking it against a base text, and the facade's soft-fail boundary.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiffError>;

#[derive(Error, Debug)]
pub enum DiffError {
    /// Unexpected failure while computing a diff
    #[error("diff computation failed: {0}")]
    Computation(String),

    /// Stored payload is malformed, truncated or does not match the schema
    #[error("malformed diff payload: {0}")]
    Decode(String),

    /// Envelope carries a version this build cannot read
    #[error("unsupported diff format version {0}")]
    UnsupportedVersion(u32),

    /// Base text handed to apply is not the text the patch was computed from
    #[error("base text checksum mismatch: expected {expected}, got {actual}")]
    BaseMismatch { expected: String, actual: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

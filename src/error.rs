//! Error types for header block parsing

use thiserror::Error;

/// Errors that can occur while reading a raw header block
///
/// SCL extraction itself never fails; a missing or malformed value is
/// reported as `None`.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse the header block structure
    #[error("Failed to parse header block: {0}")]
    Structure(String),
}

/// Result type for header parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

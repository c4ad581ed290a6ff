//! Error types for the Hikari library.
//!
//! All errors are represented by the [`HikariError`] enum. The indexing core
//! itself never fails; errors only come from reading input, parsing exports
//! and writing the output document.
//!
//! # Examples
//!
//! ```
//! use hikari::error::{HikariError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HikariError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Hikari operations.
#[derive(Error, Debug)]
pub enum HikariError {
    /// I/O errors (reading the word list, writing the output file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command line or constructor argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Structurally valid JSON that is not a usable vocabulary export
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias for operations that may fail with HikariError.
pub type Result<T> = std::result::Result<T, HikariError>;

impl HikariError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HikariError::InvalidArgument(msg.into())
    }

    /// Create a new export error.
    pub fn export<S: Into<String>>(msg: S) -> Self {
        HikariError::Export(msg.into())
    }

    /// Process exit code for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            HikariError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = HikariError::invalid_argument("bad delimiter");
        assert_eq!(error.to_string(), "Invalid argument: bad delimiter");

        let error = HikariError::export("missing cards");
        assert_eq!(error.to_string(), "Export error: missing cards");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let hikari_error = HikariError::from(io_error);

        match hikari_error {
            HikariError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(HikariError::invalid_argument("x").exit_code(), 2);
        assert_eq!(HikariError::export("x").exit_code(), 1);
        let io_error = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(HikariError::from(io_error).exit_code(), 1);
    }
}

//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid LUT size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Domain minimum is not below its maximum.
    #[error("invalid domain: min {min:?} must be below max {max:?}")]
    InvalidDomain {
        /// Minimum per channel
        min: [f64; 3],
        /// Maximum per channel
        max: [f64; 3],
    },

    /// Parse error when loading LUT files.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Nothing to write.
    #[error("LUT sequence is empty")]
    EmptySequence,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Wavelengths and values have different lengths.
    #[error("spectral shape mismatch: {wavelengths} wavelengths, {values} values")]
    ShapeMismatch {
        /// Number of wavelengths.
        wavelengths: usize,
        /// Number of values.
        values: usize,
    },

    /// Wavelengths are not strictly increasing.
    #[error("wavelengths must be strictly increasing (index {0})")]
    UnsortedWavelengths(usize),

    /// A distribution needs at least one sample.
    #[error("spectral distribution is empty")]
    Empty,
}

//! Error types for colour quality computations.
//!
//! The TM-30-18 aggregation divides by bin populations, bin average norms
//! and the reference gamut area. Inputs that would make any of those zero
//! are reported here instead of producing NaN or infinite indices.

use thiserror::Error;

/// Colour quality error.
#[derive(Debug, Error)]
pub enum QualityError {
    /// A reference hue angle does not map to one of the 16 hue bins.
    #[error("hue angle {angle} of sample {sample} is outside [0, 360)")]
    HueAngleOutOfRange {
        /// Sample index.
        sample: usize,
        /// Offending hue angle in degrees.
        angle: f64,
    },

    /// No sample falls in a hue bin, so its average is undefined.
    #[error("hue bin {bin} has no samples")]
    EmptyHueBin {
        /// Bin index.
        bin: usize,
    },

    /// The reference bin average coincides with the chromaticity origin.
    #[error("reference average of hue bin {bin} lies on the origin")]
    DegenerateBin {
        /// Bin index.
        bin: usize,
    },

    /// The reference bin averages enclose no area.
    #[error("reference gamut polygon has zero area")]
    DegenerateGamut,

    /// Per-sample sequences disagree in length.
    #[error("sample count mismatch: {test} test, {reference} reference, {delta_e} colour differences")]
    SampleCountMismatch {
        /// Test colorimetry count.
        test: usize,
        /// Reference colorimetry count.
        reference: usize,
        /// Colour difference count.
        delta_e: usize,
    },

    /// The upstream fidelity computation failed.
    #[error("base fidelity computation failed: {0}")]
    Base(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for colour quality computations.
pub type QualityResult<T> = Result<T, QualityError>;

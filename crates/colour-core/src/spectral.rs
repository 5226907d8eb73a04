//! Sampled spectral distributions.
//!
//! Spectral data is carried through the quality computations untouched, so
//! this type only guarantees a consistent shape: one value per wavelength,
//! wavelengths strictly increasing.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// A named spectral distribution sampled at given wavelengths (nm).
///
/// # Example
///
/// ```rust
/// use colour_core::SpectralDistribution;
///
/// let sd = SpectralDistribution::new("flat", vec![380.0, 390.0], vec![1.0, 1.0]).unwrap();
/// assert_eq!(sd.len(), 2);
/// assert_eq!(sd.value_at(390.0), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpectralDistribution")]
pub struct SpectralDistribution {
    /// Distribution name.
    pub name: String,
    wavelengths: Vec<f64>,
    values: Vec<f64>,
}

/// Unvalidated serde form of [`SpectralDistribution`].
#[derive(Deserialize)]
struct RawSpectralDistribution {
    name: String,
    wavelengths: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<RawSpectralDistribution> for SpectralDistribution {
    type Error = CoreError;

    fn try_from(raw: RawSpectralDistribution) -> CoreResult<Self> {
        Self::new(raw.name, raw.wavelengths, raw.values)
    }
}

impl SpectralDistribution {
    /// Creates a distribution, validating its shape.
    pub fn new(name: impl Into<String>, wavelengths: Vec<f64>, values: Vec<f64>) -> CoreResult<Self> {
        if wavelengths.len() != values.len() {
            return Err(CoreError::ShapeMismatch {
                wavelengths: wavelengths.len(),
                values: values.len(),
            });
        }
        if wavelengths.is_empty() {
            return Err(CoreError::Empty);
        }
        if let Some(i) = wavelengths.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CoreError::UnsortedWavelengths(i + 1));
        }
        Ok(Self {
            name: name.into(),
            wavelengths,
            values,
        })
    }

    /// Wavelengths in nanometers.
    #[inline]
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Values, index-aligned with [`Self::wavelengths`].
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated distribution.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value sampled exactly at `wavelength`, if present.
    pub fn value_at(&self, wavelength: f64) -> Option<f64> {
        self.wavelengths
            .iter()
            .position(|&w| w == wavelength)
            .map(|i| self.values[i])
    }

    /// Iterates `(wavelength, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths.iter().copied().zip(self.values.iter().copied())
    }
}

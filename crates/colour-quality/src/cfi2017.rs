//! CIE 2017 colour fidelity index: the base computation seam.
//!
//! TM-30-18 is computed on top of the CIE 2017 colour fidelity index. The
//! spectral part of that computation (reference illuminant selection, CAM02-UCS
//! colorimetry of the 99 test colour samples) is provided by an implementation
//! of [`FidelityBase`]; this module defines what it must produce.

use crate::{QualityError, QualityResult};
use colour_core::SpectralDistribution;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Scaling factor `c_f` of the CIE 2017 fidelity index.
pub const FIDELITY_SCALING: f64 = 6.73;

/// Colorimetry of one test colour sample under one illuminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcsColorimetry {
    /// Sample name.
    pub name: String,
    /// CIE XYZ tristimulus values.
    pub xyz: [f64; 3],
    /// CIECAM02 lightness, colourfulness and hue angle (degrees).
    pub jmh: [f64; 3],
    /// CAM02-UCS `J'`, `a'`, `b'`.
    pub jpapbp: [f64; 3],
}

impl TcsColorimetry {
    /// Hue angle in degrees.
    #[inline]
    pub fn hue_angle(&self) -> f64 {
        self.jmh[2]
    }

    /// CAM02-UCS `a'`, `b'` chromaticity.
    #[inline]
    pub fn apbp(&self) -> DVec2 {
        DVec2::new(self.jpapbp[1], self.jpapbp[2])
    }
}

/// Result of the CIE 2017 colour fidelity computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourRenderingSpecification {
    /// Name of the test spectral distribution.
    pub name: String,
    /// Reference illuminant.
    pub sd_reference: SpectralDistribution,
    /// Colour fidelity index `R_f`.
    pub r_f: f64,
    /// Per-sample fidelity indexes.
    pub r_s: Vec<f64>,
    /// Correlated colour temperature `T_cp`.
    pub cct: f64,
    /// Distance from the Planckian locus `D_uv`.
    pub d_uv: f64,
    /// Test and reference colorimetry, index-aligned.
    pub colorimetry_data: (Vec<TcsColorimetry>, Vec<TcsColorimetry>),
    /// Per-sample colour differences.
    pub delta_e_s: Vec<f64>,
}

impl ColourRenderingSpecification {
    /// Number of colour samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.delta_e_s.len()
    }

    /// Checks that test, reference and colour-difference data line up.
    pub fn validate(&self) -> QualityResult<()> {
        let (test, reference) = &self.colorimetry_data;
        if test.len() != reference.len() || test.len() != self.delta_e_s.len() {
            return Err(QualityError::SampleCountMismatch {
                test: test.len(),
                reference: reference.len(),
                delta_e: self.delta_e_s.len(),
            });
        }
        Ok(())
    }
}

/// Maps a colour difference to a fidelity index.
///
/// `R_f = 10 ln(exp((100 - c_f dE) / 10) + 1)`, the log-sum rescaling that
/// keeps the index positive for large differences.
///
/// # Example
///
/// ```rust
/// use colour_quality::delta_e_to_r_f;
///
/// assert!((delta_e_to_r_f(0.0) - 100.0).abs() < 1e-3);
/// assert!(delta_e_to_r_f(5.0) < delta_e_to_r_f(1.0));
/// ```
#[inline]
pub fn delta_e_to_r_f(delta_e: f64) -> f64 {
    10.0 * ((100.0 - FIDELITY_SCALING * delta_e) / 10.0).exp().ln_1p()
}

/// Computes the CIE 2017 colour fidelity data of a test illuminant.
///
/// Implementations own the spectral colorimetry. Failures should be wrapped
/// in [`QualityError::Base`].
pub trait FidelityBase {
    /// Full CIE 2017 specification for `sd_test`.
    fn specification(&self, sd_test: &SpectralDistribution) -> QualityResult<ColourRenderingSpecification>;

    /// Colour fidelity index `R_f` only.
    fn fidelity_index(&self, sd_test: &SpectralDistribution) -> QualityResult<f64> {
        Ok(self.specification(sd_test)?.r_f)
    }
}

/// A [`FidelityBase`] answering with a specification computed elsewhere.
///
/// Used when the CIE 2017 colorimetry comes from a file rather than from a
/// spectral computation in-process.
#[derive(Debug, Clone)]
pub struct PrecomputedFidelity {
    specification: ColourRenderingSpecification,
}

impl PrecomputedFidelity {
    /// Wraps a validated specification.
    pub fn new(specification: ColourRenderingSpecification) -> QualityResult<Self> {
        specification.validate()?;
        Ok(Self { specification })
    }

    /// The wrapped specification.
    pub fn as_specification(&self) -> &ColourRenderingSpecification {
        &self.specification
    }
}

impl FidelityBase for PrecomputedFidelity {
    fn specification(&self, _sd_test: &SpectralDistribution) -> QualityResult<ColourRenderingSpecification> {
        Ok(self.specification.clone())
    }

    fn fidelity_index(&self, _sd_test: &SpectralDistribution) -> QualityResult<f64> {
        Ok(self.specification.r_f)
    }
}

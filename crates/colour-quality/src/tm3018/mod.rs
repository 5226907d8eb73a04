//! ANSI/IES TM-30-18 colour fidelity and gamut indexes.
//!
//! TM-30-18 extends the CIE 2017 colour fidelity index with hue-resolved
//! statistics. Samples are grouped by their reference hue into 16 bins, the
//! `a'b'` averages of each bin form a test and a reference polygon, and:
//!
//! - the gamut index `R_g` compares the areas of the two polygons,
//! - `R_fs` gives a fidelity index per bin,
//! - `R_cs` and `R_hs` give chroma and hue shifts per bin.
//!
//! # Pipeline
//!
//! ```text
//! CIE 2017 base -> hue_bins -> bin_averages -> gamut_index
//!                                           -> local_fidelities / local_shifts
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use colour_quality::tm3018::colour_fidelity_index_ansi_ies_tm3018;
//!
//! let output = colour_fidelity_index_ansi_ies_tm3018(&sd, &base, true)?;
//! let spec = output.specification().unwrap();
//! println!("R_f = {:.1}, R_g = {:.1}", spec.r_f, spec.r_g);
//! ```

mod averages;
mod bins;
mod gamut;
mod local;

pub use averages::bin_averages;
pub use bins::{hue_bin_index, hue_bins, HueBins, HUE_BIN_COUNT, HUE_BIN_WIDTH};
pub use gamut::{averages_area, gamut_index};
pub use local::{bin_bisector, local_fidelities, local_shifts, LocalShifts};

use crate::{ColourRenderingSpecification, FidelityBase, QualityResult, TcsColorimetry};
use colour_core::SpectralDistribution;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// TM-30-18 colour quality specification of a test illuminant.
///
/// Per-bin arrays are index-aligned with [`Self::bins`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourQualitySpecification {
    /// Name of the test spectral distribution.
    pub name: String,
    /// Tested illuminant.
    pub sd_test: SpectralDistribution,
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
    /// Test and reference colorimetry.
    pub colorimetry_data: (Vec<TcsColorimetry>, Vec<TcsColorimetry>),
    /// Gamut index `R_g`.
    pub r_g: f64,
    /// Sample indexes in each hue bin.
    pub bins: HueBins,
    /// Mean test `a'b'` per bin.
    pub averages_test: [DVec2; HUE_BIN_COUNT],
    /// Mean reference `a'b'` per bin.
    pub averages_reference: [DVec2; HUE_BIN_COUNT],
    /// Distance of the reference averages from the origin.
    pub average_norms: [f64; HUE_BIN_COUNT],
    /// Local colour fidelity indexes.
    pub r_fs: [f64; HUE_BIN_COUNT],
    /// Local chroma shifts, in percent.
    pub r_cs: [f64; HUE_BIN_COUNT],
    /// Local hue shifts.
    pub r_hs: [f64; HUE_BIN_COUNT],
}

/// Output of [`colour_fidelity_index_ansi_ies_tm3018`].
#[derive(Debug, Clone, PartialEq)]
pub enum Tm3018Output {
    /// Only the colour fidelity index was requested.
    FidelityIndex(f64),
    /// Full specification.
    Specification(Box<ColourQualitySpecification>),
}

impl Tm3018Output {
    /// Colour fidelity index `R_f`, available in both forms.
    pub fn r_f(&self) -> f64 {
        match self {
            Self::FidelityIndex(r_f) => *r_f,
            Self::Specification(spec) => spec.r_f,
        }
    }

    /// Full specification, if it was requested.
    pub fn specification(&self) -> Option<&ColourQualitySpecification> {
        match self {
            Self::FidelityIndex(_) => None,
            Self::Specification(spec) => Some(&**spec),
        }
    }
}

/// TM-30-18 colour fidelity index of a test illuminant.
///
/// Without `additional_data` this is the CIE 2017 `R_f` as reported by
/// `base`, and none of the hue-bin statistics are computed.
pub fn colour_fidelity_index_ansi_ies_tm3018<B>(
    sd_test: &SpectralDistribution,
    base: &B,
    additional_data: bool,
) -> QualityResult<Tm3018Output>
where
    B: FidelityBase + ?Sized,
{
    trace!(name = %sd_test.name, additional_data, "tm3018");

    if !additional_data {
        return base.fidelity_index(sd_test).map(Tm3018Output::FidelityIndex);
    }

    let specification = base.specification(sd_test)?;
    tm3018_specification(sd_test.clone(), specification)
        .map(|spec| Tm3018Output::Specification(Box::new(spec)))
}

/// Builds the TM-30-18 specification from a CIE 2017 result.
///
/// # Errors
///
/// - [`QualityError::SampleCountMismatch`](crate::QualityError::SampleCountMismatch)
///   if the CIE 2017 data is inconsistent
/// - [`QualityError::HueAngleOutOfRange`](crate::QualityError::HueAngleOutOfRange),
///   [`QualityError::EmptyHueBin`](crate::QualityError::EmptyHueBin),
///   [`QualityError::DegenerateGamut`](crate::QualityError::DegenerateGamut) and
///   [`QualityError::DegenerateBin`](crate::QualityError::DegenerateBin)
///   where the hue-bin statistics are undefined
pub fn tm3018_specification(
    sd_test: SpectralDistribution,
    specification: ColourRenderingSpecification,
) -> QualityResult<ColourQualitySpecification> {
    specification.validate()?;
    let (test, reference) = &specification.colorimetry_data;

    let bins = hue_bins(reference.iter().map(TcsColorimetry::hue_angle))?;
    debug!(
        samples = reference.len(),
        populations = ?bins.iter().map(Vec::len).collect::<Vec<_>>(),
        "hue bins"
    );

    let test_apbp: Vec<DVec2> = test.iter().map(TcsColorimetry::apbp).collect();
    let reference_apbp: Vec<DVec2> = reference.iter().map(TcsColorimetry::apbp).collect();
    let averages_test = bin_averages(&bins, &test_apbp)?;
    let averages_reference = bin_averages(&bins, &reference_apbp)?;

    let r_g = gamut_index(&averages_test, &averages_reference)?;
    let r_fs = local_fidelities(&bins, &specification.delta_e_s)?;
    let shifts = local_shifts(&averages_test, &averages_reference)?;
    debug!(r_f = specification.r_f, r_g, "tm3018 indexes");

    let ColourRenderingSpecification {
        name,
        sd_reference,
        r_f,
        r_s,
        cct,
        d_uv,
        colorimetry_data,
        ..
    } = specification;

    Ok(ColourQualitySpecification {
        name,
        sd_test,
        sd_reference,
        r_f,
        r_s,
        cct,
        d_uv,
        colorimetry_data,
        r_g,
        bins,
        averages_test,
        averages_reference,
        average_norms: shifts.average_norms,
        r_fs,
        r_cs: shifts.r_cs,
        r_hs: shifts.r_hs,
    })
}

//! # colour-quality
//!
//! Colour rendition quality indexes of light sources.
//!
//! - [`cfi2017`] - CIE 2017 colour fidelity index data and the
//!   [`FidelityBase`] seam that produces it
//! - [`tm3018`] - ANSI/IES TM-30-18 fidelity, gamut and hue-bin indexes
//!
//! The spectral colorimetry of the CIE 2017 method is not computed here;
//! a [`FidelityBase`] implementation supplies it, and [`PrecomputedFidelity`]
//! serves results loaded from elsewhere.
//!
//! # Usage
//!
//! ```rust,ignore
//! use colour_quality::{tm3018, PrecomputedFidelity};
//!
//! let base = PrecomputedFidelity::new(cie2017_result)?;
//! let output = tm3018::colour_fidelity_index_ansi_ies_tm3018(&sd, &base, true)?;
//! ```
//!
//! # Dependencies
//!
//! - [`colour-core`] - Spectral distributions
//! - [`colour-math`] - Polygon area
//! - [`glam`] - `a'b'` points
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `colour-cli` - `colour tm30`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cfi2017;
mod error;
pub mod tm3018;

pub use cfi2017::{
    delta_e_to_r_f, ColourRenderingSpecification, FidelityBase, PrecomputedFidelity, TcsColorimetry,
    FIDELITY_SCALING,
};
pub use error::{QualityError, QualityResult};
pub use tm3018::{
    colour_fidelity_index_ansi_ies_tm3018, tm3018_specification, ColourQualitySpecification,
    Tm3018Output,
};

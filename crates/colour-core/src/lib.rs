//! # colour-core
//!
//! Core types shared by the colour-rs crates.
//!
//! - [`SpectralDistribution`] - Sampled spectral data (illuminants, reflectances)
//! - [`DomainRangeScale`] - Reference (`[0, 100]`) or unit (`[0, 1]`) scale
//! - [`CoreError`] - Errors raised while building core types
//!
//! ## Crate Structure
//!
//! ```text
//! colour-core (this crate)
//!    ^
//!    |
//!    +-- colour-math (distances, polygon area)
//!    +-- colour-quality (CIE 2017 / TM-30-18)
//!    +-- colour-difference (DIN99)
//!    +-- colour-lut (LUT types, .cube I/O)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod scale;
mod spectral;

pub use error::{CoreError, CoreResult};
pub use scale::DomainRangeScale;
pub use spectral::SpectralDistribution;

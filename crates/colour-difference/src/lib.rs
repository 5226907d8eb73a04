//! # colour-difference
//!
//! Colour difference formulas.
//!
//! - [`din99`] - `ΔE_99` from DIN 6176 / ASTM D2244-07
//!
//! # Usage
//!
//! ```rust
//! use colour_difference::{delta_e_din99, Din99Options};
//!
//! let d = delta_e_din99(
//!     [60.2574, -34.0099, 36.2677],
//!     [60.4626, -34.1751, 39.4387],
//!     Din99Options::default(),
//! );
//! assert!((d - 1.1772166).abs() < 1e-7);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Batch differences with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod din99;

pub use din99::{delta_e_din99, delta_e_din99_batch, lab_to_din99, Din99Options};

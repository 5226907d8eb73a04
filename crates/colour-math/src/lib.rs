//! # colour-math
//!
//! Math utilities for colour-science computations.
//!
//! - [`euclidean_distance`] - Distance between two 3-component colour values
//! - [`polygon_area`] - Signed area of a closed polygon (shoelace formula)
//!
//! # Design
//!
//! Points and triplets are [`glam`] double-precision vectors (`DVec2`,
//! `DVec3`). Colour-science reference values are published in double
//! precision, so nothing here works in `f32`.
//!
//! # Usage
//!
//! ```rust
//! use colour_math::{polygon_area, DVec2};
//!
//! let square = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 0.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(0.0, 1.0),
//! ];
//! assert_eq!(polygon_area(&square), 1.0);
//! ```
//!
//! # Used By
//!
//! - `colour-quality` - TM-30-18 gamut area
//! - `colour-difference` - DIN99 distance

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod distance;
mod polygon;

pub use distance::*;
pub use polygon::*;

/// Re-export glam types for direct use
pub use ::glam::{DVec2, DVec3};

//! # colour-lut
//!
//! Look-Up Table (LUT) types and `.cube` file I/O.
//!
//! # LUT Types
//!
//! - [`Lut1D`] - Single-channel 1D table
//! - [`Lut3x1D`] - Three independent 1D tables, one per channel
//! - [`Lut3D`] - Full RGB cube
//! - [`Lut`] / [`LutSequence`] - Any of the above, alone or chained
//!
//! Every LUT carries a name, an input domain and free-form comments, which
//! is what the `.cube` format stores besides the table.
//!
//! # Supported Formats
//!
//! - `.cube` - Iridas / Adobe / Resolve ([`cube`] module)
//!
//! # Usage
//!
//! ```rust,ignore
//! use colour_lut::{cube, Lut};
//!
//! let lut = cube::read_cube("grade.cube")?;
//! if let Lut::Lut3D(cube) = &lut {
//!     let rgb = cube.apply([0.5, 0.3, 0.2]);
//! }
//! cube::write_cube("copy.cube", &lut, cube::DEFAULT_DECIMALS)?;
//! ```
//!
//! # Interpolation
//!
//! - 1D tables: linear
//! - 3D cubes: trilinear
//!
//! # Used By
//!
//! - `colour-cli` - `colour lut`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cube;
mod error;
mod lut1d;
mod lut3d;
mod sequence;

pub use cube::{parse_cube, read_cube, write_cube, write_cube_sequence};
pub use error::{LutError, LutResult};
pub use lut1d::{Lut1D, Lut3x1D};
pub use lut3d::Lut3D;
pub use sequence::{Lut, LutSequence};

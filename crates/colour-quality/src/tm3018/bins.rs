//! Hue binning of colour samples.
//!
//! The hue circle is split into [`HUE_BIN_COUNT`] sectors of
//! [`HUE_BIN_WIDTH`] degrees; bin `i` covers `[22.5 i, 22.5 (i + 1))`.

use crate::{QualityError, QualityResult};

/// Number of hue bins.
pub const HUE_BIN_COUNT: usize = 16;

/// Width of one hue bin in degrees.
pub const HUE_BIN_WIDTH: f64 = 360.0 / HUE_BIN_COUNT as f64;

/// Sample indexes per hue bin, ordered by bin index.
pub type HueBins = [Vec<usize>; HUE_BIN_COUNT];

/// Bin index of a hue angle in degrees.
///
/// Angles are not wrapped: anything outside `[0, 360)`, NaN included, has no
/// bin.
///
/// # Example
///
/// ```rust
/// use colour_quality::tm3018::hue_bin_index;
///
/// assert_eq!(hue_bin_index(0.0), Some(0));
/// assert_eq!(hue_bin_index(22.5), Some(1));
/// assert_eq!(hue_bin_index(359.9), Some(15));
/// assert_eq!(hue_bin_index(360.0), None);
/// assert_eq!(hue_bin_index(-1.0), None);
/// ```
#[inline]
pub fn hue_bin_index(angle: f64) -> Option<usize> {
    let bin = (angle / HUE_BIN_WIDTH).floor();
    if bin >= 0.0 && bin < HUE_BIN_COUNT as f64 {
        Some(bin as usize)
    } else {
        None
    }
}

/// Partitions samples into hue bins by their reference hue angle.
///
/// Every sample index lands in exactly one bin, in ascending order within
/// the bin. Bins may be empty.
///
/// # Errors
///
/// [`QualityError::HueAngleOutOfRange`] for the first angle outside
/// `[0, 360)`. Upstream colorimetry is expected to produce normalised angles.
pub fn hue_bins<I>(hue_angles: I) -> QualityResult<HueBins>
where
    I: IntoIterator<Item = f64>,
{
    let mut bins: HueBins = Default::default();
    for (sample, angle) in hue_angles.into_iter().enumerate() {
        let bin = hue_bin_index(angle).ok_or(QualityError::HueAngleOutOfRange { sample, angle })?;
        bins[bin].push(sample);
    }
    Ok(bins)
}

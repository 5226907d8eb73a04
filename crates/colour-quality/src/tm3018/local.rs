//! Local (per hue bin) fidelity, chroma shift and hue shift.
//!
//! Shifts decompose the test-minus-reference average displacement of a bin
//! along the bin's bisector: the radial part is the chroma shift `R_cs`, in
//! percent of the reference average's distance from the origin, the
//! tangential part is the hue shift `R_hs`, as a plain ratio.

use super::bins::{HueBins, HUE_BIN_COUNT, HUE_BIN_WIDTH};
use crate::{delta_e_to_r_f, QualityError, QualityResult};
use glam::DVec2;

/// Angle bisecting a hue bin, in radians.
#[inline]
pub fn bin_bisector(bin: usize) -> f64 {
    (HUE_BIN_WIDTH * bin as f64 + HUE_BIN_WIDTH / 2.0).to_radians()
}

/// Local colour fidelity `R_fs`: mean in-bin colour difference mapped
/// through [`delta_e_to_r_f`].
///
/// # Errors
///
/// [`QualityError::EmptyHueBin`] for the first bin without samples.
pub fn local_fidelities(bins: &HueBins, delta_e_s: &[f64]) -> QualityResult<[f64; HUE_BIN_COUNT]> {
    let mut r_fs = [0.0; HUE_BIN_COUNT];
    for (bin, (members, r_f)) in bins.iter().zip(r_fs.iter_mut()).enumerate() {
        if members.is_empty() {
            return Err(QualityError::EmptyHueBin { bin });
        }
        let mean = members.iter().map(|&i| delta_e_s[i]).sum::<f64>() / members.len() as f64;
        *r_f = delta_e_to_r_f(mean);
    }
    Ok(r_fs)
}

/// Chroma and hue shifts of every hue bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalShifts {
    /// Distance of each reference average from the origin.
    pub average_norms: [f64; HUE_BIN_COUNT],
    /// Local chroma shifts, in percent.
    pub r_cs: [f64; HUE_BIN_COUNT],
    /// Local hue shifts.
    pub r_hs: [f64; HUE_BIN_COUNT],
}

/// Projects each bin's average displacement on its bisector.
///
/// # Errors
///
/// [`QualityError::DegenerateBin`] if a reference average sits on the origin.
pub fn local_shifts(
    averages_test: &[DVec2; HUE_BIN_COUNT],
    averages_reference: &[DVec2; HUE_BIN_COUNT],
) -> QualityResult<LocalShifts> {
    let mut shifts = LocalShifts {
        average_norms: [0.0; HUE_BIN_COUNT],
        r_cs: [0.0; HUE_BIN_COUNT],
        r_hs: [0.0; HUE_BIN_COUNT],
    };

    for bin in 0..HUE_BIN_COUNT {
        let reference = averages_reference[bin];
        let norm = reference.length();
        if norm == 0.0 {
            return Err(QualityError::DegenerateBin { bin });
        }

        let delta = averages_test[bin] - reference;
        let radial = DVec2::from_angle(bin_bisector(bin));

        shifts.average_norms[bin] = norm;
        shifts.r_cs[bin] = 100.0 * delta.dot(radial) / norm;
        shifts.r_hs[bin] = delta.dot(radial.perp()) / norm;
    }

    Ok(shifts)
}

//! Per-bin chromaticity averages.

use super::bins::{HueBins, HUE_BIN_COUNT};
use crate::{QualityError, QualityResult};
use glam::DVec2;

/// Mean `a'b'` point of each hue bin.
///
/// `points` is indexed by sample, as in [`HueBins`].
///
/// # Errors
///
/// [`QualityError::EmptyHueBin`] for the first bin without samples.
///
/// # Panics
///
/// If a bin references a sample index outside `points`.
pub fn bin_averages(bins: &HueBins, points: &[DVec2]) -> QualityResult<[DVec2; HUE_BIN_COUNT]> {
    let mut averages = [DVec2::ZERO; HUE_BIN_COUNT];
    for (bin, (members, average)) in bins.iter().zip(averages.iter_mut()).enumerate() {
        if members.is_empty() {
            return Err(QualityError::EmptyHueBin { bin });
        }
        let sum: DVec2 = members.iter().map(|&i| points[i]).sum();
        *average = sum / members.len() as f64;
    }
    Ok(averages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_per_bin() -> HueBins {
        std::array::from_fn(|bin| vec![bin])
    }

    #[test]
    fn test_single_member_is_identity() {
        let points: Vec<DVec2> = (0..16).map(|i| DVec2::new(i as f64, -(i as f64))).collect();
        let averages = bin_averages(&one_per_bin(), &points).unwrap();
        assert_eq!(averages.as_slice(), points.as_slice());
    }

    #[test]
    fn test_mean() {
        let mut bins = one_per_bin();
        bins[3] = vec![3, 16, 17];
        let mut points: Vec<DVec2> = (0..16).map(|_| DVec2::ONE).collect();
        points[3] = DVec2::new(1.0, 2.0);
        points.push(DVec2::new(2.0, 4.0));
        points.push(DVec2::new(3.0, 6.0));

        let averages = bin_averages(&bins, &points).unwrap();
        assert_relative_eq!(averages[3].x, 2.0);
        assert_relative_eq!(averages[3].y, 4.0);
        assert_eq!(averages[4], DVec2::ONE);
    }

    #[test]
    fn test_empty_bin() {
        let mut bins = one_per_bin();
        bins[7].clear();
        let points = vec![DVec2::ONE; 16];
        assert!(matches!(
            bin_averages(&bins, &points),
            Err(QualityError::EmptyHueBin { bin: 7 })
        ));
    }
}

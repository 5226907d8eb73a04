//! Gamut index from hue-bin average polygons.

use crate::{QualityError, QualityResult};
use colour_math::polygon_area;
use glam::DVec2;
use tracing::trace;

/// Signed area of the polygon formed by hue bin averages, in bin order.
#[inline]
pub fn averages_area(averages: &[DVec2]) -> f64 {
    polygon_area(averages)
}

/// Gamut index `R_g = 100 * area(test) / area(reference)`.
///
/// Both polygons must share a winding; hue bins are ordered by angle, so
/// well-formed averages are counter-clockwise.
///
/// # Errors
///
/// [`QualityError::DegenerateGamut`] if the reference polygon has zero area.
pub fn gamut_index(averages_test: &[DVec2], averages_reference: &[DVec2]) -> QualityResult<f64> {
    let reference_area = averages_area(averages_reference);
    if reference_area == 0.0 {
        return Err(QualityError::DegenerateGamut);
    }
    let test_area = averages_area(averages_test);
    trace!(test_area, reference_area, "gamut areas");
    Ok(100.0 * test_area / reference_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring(radius: f64) -> Vec<DVec2> {
        (0..16)
            .map(|i| DVec2::from_angle((22.5 * i as f64 + 11.25).to_radians()) * radius)
            .collect()
    }

    #[test]
    fn test_identical_is_100() {
        let points = ring(25.0);
        assert_relative_eq!(gamut_index(&points, &points).unwrap(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scaled_test_polygon() {
        // Area scales with the square of the radius
        let r_g = gamut_index(&ring(22.0), &ring(20.0)).unwrap();
        assert_relative_eq!(r_g, 121.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_reference_area() {
        let flat = vec![DVec2::ZERO; 16];
        assert!(matches!(gamut_index(&ring(1.0), &flat), Err(QualityError::DegenerateGamut)));
    }
}

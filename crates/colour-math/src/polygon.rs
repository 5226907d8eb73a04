//! Signed polygon area.

use glam::DVec2;

/// Signed area of the closed polygon through `points`, in order.
///
/// Sums `(u.x * v.y - u.y * v.x) / 2` over every edge `u -> v`, the last
/// point wrapping back to the first. Counter-clockwise winding is positive,
/// clockwise negative. Fewer than three points enclose no area.
pub fn polygon_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]) / 2.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn regular(n: usize, radius: f64) -> Vec<DVec2> {
        (0..n)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                DVec2::new(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_triangle() {
        let tri = [DVec2::new(0.0, 0.0), DVec2::new(4.0, 0.0), DVec2::new(0.0, 3.0)];
        assert_relative_eq!(polygon_area(&tri), 6.0);
    }

    #[test]
    fn test_reversed_winding_negates() {
        let mut points = regular(16, 20.0);
        let area = polygon_area(&points);
        points.reverse();
        assert_relative_eq!(polygon_area(&points), -area, max_relative = 1e-12);
        assert!(area > 0.0);
    }

    #[test]
    fn test_regular_polygon() {
        // n/2 * r^2 * sin(2pi/n)
        let expected = 8.0 * 100.0 * (std::f64::consts::TAU / 16.0).sin();
        assert_relative_eq!(polygon_area(&regular(16, 10.0)), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[DVec2::ONE, DVec2::ZERO]), 0.0);
    }
}

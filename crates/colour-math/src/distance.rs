//! Distances between colour values.

use glam::DVec3;

/// Euclidean distance between two 3-component values.
///
/// # Example
///
/// ```rust
/// use colour_math::euclidean_distance;
///
/// let d = euclidean_distance([0.0, 3.0, 0.0], [4.0, 0.0, 0.0]);
/// assert_eq!(d, 5.0);
/// ```
#[inline]
pub fn euclidean_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    DVec3::from_array(a).distance(DVec3::from_array(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_symmetric() {
        let a = [48.99183622, -0.10561667, 400.65619925];
        let b = [50.65907324, -0.11671910, 402.82235718];
        assert_relative_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
        assert_relative_eq!(euclidean_distance(a, a), 0.0);
    }
}

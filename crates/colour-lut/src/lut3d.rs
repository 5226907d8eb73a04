//! 3-dimensional lookup table.

use crate::lut1d::{check_domain, check_size, locate, DEFAULT_DOMAIN};
use crate::{LutError, LutResult};

/// Largest cube edge.
pub(crate) const MAX_SIZE: usize = 256;

fn check_cube_size(size: usize) -> LutResult<()> {
    check_size(size)?;
    if size > MAX_SIZE {
        return Err(LutError::InvalidSize(format!(
            "3D LUT size must be <= {}, got {}",
            MAX_SIZE, size
        )));
    }
    Ok(())
}

/// A 3-dimensional lookup table.
///
/// # Structure
///
/// - `size^3` entries, each containing RGB output values
/// - Stored red-fastest: `index = r + size * (g + size * b)`, the `.cube`
///   row order
/// - Trilinear interpolation for lookup
///
/// # Example
///
/// ```rust
/// use colour_lut::Lut3D;
///
/// let lut = Lut3D::linear(17, [[0.0; 3], [1.0; 3]]).unwrap();
/// let out = lut.apply([0.5, 0.3, 0.8]);
/// assert!((out[1] - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Table rows, red index varying fastest.
    pub table: Vec<[f64; 3]>,
    /// Cube edge length.
    pub size: usize,
    /// LUT name.
    pub name: String,
    /// Input domain `[min, max]` per channel.
    pub domain: [[f64; 3]; 2],
    /// Free-form comments.
    pub comments: Vec<String>,
}

impl Lut3D {
    /// Creates a cube over the `[0, 1]` domain.
    ///
    /// `table` must hold exactly `size^3` red-fastest rows.
    pub fn new(table: Vec<[f64; 3]>, size: usize, name: impl Into<String>) -> LutResult<Self> {
        check_cube_size(size)?;
        let expected = size * size * size;
        if table.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                table.len()
            )));
        }
        Ok(Self {
            table,
            size,
            name: name.into(),
            domain: DEFAULT_DOMAIN,
            comments: Vec::new(),
        })
    }

    /// Creates a pass-through cube spanning `domain`.
    pub fn linear(size: usize, domain: [[f64; 3]; 2]) -> LutResult<Self> {
        check_cube_size(size)?;
        let [min, max] = domain;
        let axis = |c: usize, i: usize| min[c] + (max[c] - min[c]) * i as f64 / (size - 1) as f64;

        let mut table = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    table.push([axis(0, r), axis(1, g), axis(2, b)]);
                }
            }
        }
        Self::new(table, size, format!("Linear {}", size))?.with_domain(domain)
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, domain: [[f64; 3]; 2]) -> LutResult<Self> {
        check_domain(domain)?;
        self.domain = domain;
        Ok(self)
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Returns the total number of entries in the LUT.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Gets the value at grid position (r, g, b).
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> [f64; 3] {
        self.table[r + self.size * (g + self.size * b)]
    }

    /// Applies the cube with trilinear interpolation.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let [min, max] = self.domain;
        let (ri, rf) = locate(rgb[0], min[0], max[0], self.size);
        let (gi, gf) = locate(rgb[1], min[1], max[1], self.size);
        let (bi, bf) = locate(rgb[2], min[2], max[2], self.size);

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        std::array::from_fn(|i| {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            c0 * (1.0 - bf) + c1 * bf
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_identity() {
        let lut = Lut3D::linear(9, [[-0.1, -0.2, -0.4], [1.5, 3.0, 6.0]]).unwrap();
        assert_eq!(lut.entry_count(), 729);
        let rgb = [0.37, 2.1, -0.3];
        let out = lut.apply(rgb);
        for c in 0..3 {
            assert_relative_eq!(out[c], rgb[c], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_red_fastest_layout() {
        let lut = Lut3D::linear(2, DEFAULT_DOMAIN).unwrap();
        assert_eq!(lut.table[1], [1.0, 0.0, 0.0]);
        assert_eq!(lut.table[2], [0.0, 1.0, 0.0]);
        assert_eq!(lut.table[4], [0.0, 0.0, 1.0]);
        assert_eq!(lut.get(1, 1, 0), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_size_checks() {
        assert!(Lut3D::new(vec![[0.0; 3]; 7], 2, "short").is_err());
        assert!(Lut3D::new(vec![[0.0; 3]; 1], 1, "tiny").is_err());
        assert!(Lut3D::linear(257, DEFAULT_DOMAIN).is_err());
    }

    #[test]
    fn test_trilinear_midpoint() {
        let mut lut = Lut3D::linear(2, DEFAULT_DOMAIN).unwrap();
        lut.table[7] = [2.0, 2.0, 2.0];
        // Centre blends the 8 corners equally
        let out = lut.apply([0.5, 0.5, 0.5]);
        let expected = (0.0 + 1.0 + 0.0 + 1.0 + 0.0 + 1.0 + 0.0 + 2.0) / 8.0;
        assert_relative_eq!(out[0], expected);
    }
}

//! 1-dimensional lookup tables.
//!
//! [`Lut1D`] holds one curve shared by every channel, [`Lut3x1D`] one curve
//! per channel. Both interpolate linearly and clamp inputs to their domain.

use crate::{LutError, LutResult};

/// Smallest usable table size.
pub(crate) const MIN_SIZE: usize = 2;

/// Default input domain of a LUT.
pub(crate) const DEFAULT_DOMAIN: [[f64; 3]; 2] = [[0.0; 3], [1.0; 3]];

pub(crate) fn check_size(size: usize) -> LutResult<()> {
    if size < MIN_SIZE {
        return Err(LutError::InvalidSize(format!(
            "LUT size must be >= {}, got {}",
            MIN_SIZE, size
        )));
    }
    Ok(())
}

pub(crate) fn check_domain(domain: [[f64; 3]; 2]) -> LutResult<()> {
    let [min, max] = domain;
    if min.iter().zip(&max).any(|(lo, hi)| !(lo < hi)) {
        return Err(LutError::InvalidDomain { min, max });
    }
    Ok(())
}

/// Lower table index and blend factor of `value` in a table of `size`
/// entries spanning `[min, max]`.
#[inline]
pub(crate) fn locate(value: f64, min: f64, max: f64, size: usize) -> (usize, f64) {
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let idx_f = t * (size - 1) as f64;
    let idx0 = (idx_f.floor() as usize).min(size - 2);
    (idx0, idx_f - idx0 as f64)
}

fn linear_entries(size: usize, min: f64, max: f64) -> impl Iterator<Item = f64> {
    (0..size).map(move |i| min + (max - min) * i as f64 / (size - 1) as f64)
}

/// A single-channel 1D lookup table.
///
/// # Example
///
/// ```rust
/// use colour_lut::Lut1D;
///
/// let lut = Lut1D::new(vec![0.0, 0.25, 1.0], "Curve").unwrap();
/// assert_eq!(lut.apply(0.5), 0.25);
/// assert_eq!(lut.apply(0.75), 0.625);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1D {
    /// Table entries.
    pub table: Vec<f64>,
    /// LUT name.
    pub name: String,
    /// Input domain `[min, max]`.
    pub domain: [f64; 2],
    /// Free-form comments.
    pub comments: Vec<String>,
}

impl Lut1D {
    /// Creates a LUT over the `[0, 1]` domain.
    pub fn new(table: Vec<f64>, name: impl Into<String>) -> LutResult<Self> {
        check_size(table.len())?;
        Ok(Self {
            table,
            name: name.into(),
            domain: [0.0, 1.0],
            comments: Vec::new(),
        })
    }

    /// Creates a pass-through LUT spanning `domain`.
    pub fn linear(size: usize, domain: [f64; 2]) -> LutResult<Self> {
        check_size(size)?;
        Self::new(linear_entries(size, domain[0], domain[1]).collect(), format!("Linear {}", size))?
            .with_domain(domain)
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, domain: [f64; 2]) -> LutResult<Self> {
        check_domain([[domain[0]; 3], [domain[1]; 3]])?;
        self.domain = domain;
        Ok(self)
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Evaluates the LUT with linear interpolation.
    pub fn apply(&self, value: f64) -> f64 {
        let (i, frac) = locate(value, self.domain[0], self.domain[1], self.size());
        self.table[i] * (1.0 - frac) + self.table[i + 1] * frac
    }

    /// Widens to a three-channel LUT with the same curve on each channel.
    pub fn to_lut3x1d(&self) -> Lut3x1D {
        Lut3x1D {
            table: self.table.iter().map(|&v| [v; 3]).collect(),
            name: self.name.clone(),
            domain: [[self.domain[0]; 3], [self.domain[1]; 3]],
            comments: self.comments.clone(),
        }
    }
}

/// Three independent 1D curves, one per RGB channel.
///
/// # Example
///
/// ```rust
/// use colour_lut::Lut3x1D;
///
/// let lut = Lut3x1D::linear(16, [[0.0; 3], [1.0, 2.0, 4.0]]).unwrap();
/// let out = lut.apply([0.5, 1.0, 2.0]);
/// assert!((out[2] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3x1D {
    /// Table rows, one RGB triplet per entry.
    pub table: Vec<[f64; 3]>,
    /// LUT name.
    pub name: String,
    /// Input domain `[min, max]` per channel.
    pub domain: [[f64; 3]; 2],
    /// Free-form comments.
    pub comments: Vec<String>,
}

impl Lut3x1D {
    /// Creates a LUT over the `[0, 1]` domain.
    pub fn new(table: Vec<[f64; 3]>, name: impl Into<String>) -> LutResult<Self> {
        check_size(table.len())?;
        Ok(Self {
            table,
            name: name.into(),
            domain: DEFAULT_DOMAIN,
            comments: Vec::new(),
        })
    }

    /// Creates a pass-through LUT spanning `domain`.
    pub fn linear(size: usize, domain: [[f64; 3]; 2]) -> LutResult<Self> {
        check_size(size)?;
        let [min, max] = domain;
        let table = (0..size)
            .map(|i| {
                let t = i as f64 / (size - 1) as f64;
                std::array::from_fn(|c| min[c] + (max[c] - min[c]) * t)
            })
            .collect();
        Self::new(table, format!("Linear {}", size))?.with_domain(domain)
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

    /// Number of entries per channel.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Evaluates each channel on its own curve.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|c| {
            let (i, frac) = locate(rgb[c], self.domain[0][c], self.domain[1][c], self.size());
            self.table[i][c] * (1.0 - frac) + self.table[i + 1][c] * frac
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_is_identity() {
        let lut = Lut1D::linear(33, [-0.5, 2.0]).unwrap();
        for v in [-0.5, 0.0, 0.3, 1.7, 2.0] {
            assert_relative_eq!(lut.apply(v), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_clamps_outside_domain() {
        let lut = Lut1D::new(vec![0.1, 0.9], "ramp").unwrap();
        assert_eq!(lut.apply(-1.0), 0.1);
        assert_eq!(lut.apply(2.0), 0.9);
    }

    #[test]
    fn test_too_small() {
        assert!(matches!(Lut1D::new(vec![0.5], "x"), Err(LutError::InvalidSize(_))));
        assert!(Lut3x1D::linear(1, DEFAULT_DOMAIN).is_err());
    }

    #[test]
    fn test_inverted_domain() {
        let lut = Lut1D::new(vec![0.0, 1.0], "x").unwrap();
        assert!(matches!(lut.with_domain([1.0, 0.0]), Err(LutError::InvalidDomain { .. })));
    }

    #[test]
    fn test_widen() {
        let lut = Lut1D::linear(4, [0.0, 3.0])
            .unwrap()
            .with_comments(vec!["ramp".into()]);
        let wide = lut.to_lut3x1d();
        assert_eq!(wide.size(), 4);
        assert_eq!(wide.table[2], [2.0; 3]);
        assert_eq!(wide.domain, [[0.0; 3], [3.0; 3]]);
        assert_eq!(wide.comments, lut.comments);
        assert_eq!(wide.apply([1.5, 0.0, 3.0]), [1.5, 0.0, 3.0]);
    }

    #[test]
    fn test_per_channel_curves() {
        let lut = Lut3x1D::new(vec![[0.0, 1.0, 0.0], [1.0, 0.0, 0.5]], "mixed").unwrap();
        let out = lut.apply([0.25, 0.25, 0.5]);
        assert_relative_eq!(out[0], 0.25);
        assert_relative_eq!(out[1], 0.75);
        assert_relative_eq!(out[2], 0.25);
    }
}

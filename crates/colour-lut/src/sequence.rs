//! LUTs of any dimension, alone or chained.

use crate::{Lut1D, Lut3D, Lut3x1D};

/// Any supported LUT.
#[derive(Debug, Clone, PartialEq)]
pub enum Lut {
    /// Single-channel 1D table.
    Lut1D(Lut1D),
    /// Per-channel 1D tables.
    Lut3x1D(Lut3x1D),
    /// RGB cube.
    Lut3D(Lut3D),
}

impl Lut {
    /// LUT name.
    pub fn name(&self) -> &str {
        match self {
            Self::Lut1D(lut) => &lut.name,
            Self::Lut3x1D(lut) => &lut.name,
            Self::Lut3D(lut) => &lut.name,
        }
    }

    /// Comments attached to the LUT.
    pub fn comments(&self) -> &[String] {
        match self {
            Self::Lut1D(lut) => &lut.comments,
            Self::Lut3x1D(lut) => &lut.comments,
            Self::Lut3D(lut) => &lut.comments,
        }
    }

    /// Table size: entries for 1D tables, edge length for cubes.
    pub fn size(&self) -> usize {
        match self {
            Self::Lut1D(lut) => lut.size(),
            Self::Lut3x1D(lut) => lut.size(),
            Self::Lut3D(lut) => lut.size,
        }
    }

    /// Input domain `[min, max]` per channel.
    pub fn domain(&self) -> [[f64; 3]; 2] {
        match self {
            Self::Lut1D(lut) => [[lut.domain[0]; 3], [lut.domain[1]; 3]],
            Self::Lut3x1D(lut) => lut.domain,
            Self::Lut3D(lut) => lut.domain,
        }
    }

    /// Short kind label: `1D`, `3x1D` or `3D`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lut1D(_) => "1D",
            Self::Lut3x1D(_) => "3x1D",
            Self::Lut3D(_) => "3D",
        }
    }

    /// Applies the LUT to an RGB value.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Lut1D(lut) => rgb.map(|v| lut.apply(v)),
            Self::Lut3x1D(lut) => lut.apply(rgb),
            Self::Lut3D(lut) => lut.apply(rgb),
        }
    }
}

impl From<Lut1D> for Lut {
    fn from(lut: Lut1D) -> Self {
        Self::Lut1D(lut)
    }
}

impl From<Lut3x1D> for Lut {
    fn from(lut: Lut3x1D) -> Self {
        Self::Lut3x1D(lut)
    }
}

impl From<Lut3D> for Lut {
    fn from(lut: Lut3D) -> Self {
        Self::Lut3D(lut)
    }
}

/// LUTs applied one after another.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LutSequence {
    luts: Vec<Lut>,
}

impl LutSequence {
    /// Creates a sequence.
    pub fn new(luts: Vec<Lut>) -> Self {
        Self { luts }
    }

    /// Appends a LUT.
    pub fn push(&mut self, lut: impl Into<Lut>) {
        self.luts.push(lut.into());
    }

    /// First LUT, if any.
    pub fn first(&self) -> Option<&Lut> {
        self.luts.first()
    }

    /// Number of LUTs.
    pub fn len(&self) -> usize {
        self.luts.len()
    }

    /// True if the sequence holds no LUT.
    pub fn is_empty(&self) -> bool {
        self.luts.is_empty()
    }

    /// Iterates the LUTs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Lut> {
        self.luts.iter()
    }

    /// Applies every LUT in order.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.luts.iter().fold(rgb, |rgb, lut| lut.apply(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sequence_applies_in_order() {
        let double = Lut1D::new(vec![0.0, 2.0], "double").unwrap();
        let square = Lut1D::new((0..=200).map(|i| (i as f64 / 100.0).powi(2)).collect(), "square")
            .unwrap()
            .with_domain([0.0, 2.0])
            .unwrap();

        let mut seq = LutSequence::default();
        seq.push(double);
        seq.push(square);

        assert_eq!(seq.len(), 2);
        assert_eq!(seq.first().map(Lut::name), Some("double"));
        let out = seq.apply([0.25, 0.5, 0.0]);
        assert_relative_eq!(out[0], 0.25, epsilon = 1e-4);
        assert_relative_eq!(out[1], 1.0, epsilon = 1e-4);
        assert_relative_eq!(out[2], 0.0);
    }

    #[test]
    fn test_lut_accessors() {
        let lut: Lut = Lut3D::linear(3, [[0.0; 3], [2.0; 3]]).unwrap().into();
        assert_eq!(lut.kind(), "3D");
        assert_eq!(lut.size(), 3);
        assert_eq!(lut.domain(), [[0.0; 3], [2.0; 3]]);
        assert!(lut.comments().is_empty());
    }
}

//! DIN99 colour difference.
//!
//! CIE L*a*b* is mapped to the DIN99 space, where Euclidean distance is
//! closer to perceived difference:
//!
//! ```text
//! e    = a cos 16° + b sin 16°
//! f    = 0.7 (-a sin 16° + b cos 16°)
//! G    = sqrt(e² + f²)
//! C_99 = ln(1 + 0.045 G) / (0.045 k_CH k_E)
//! L_99 = 105.509 ln(1 + 0.0158 L) k_E
//! ```

use colour_core::DomainRangeScale;
use colour_math::euclidean_distance;

const L_SCALE: f64 = 105.509;
const L_COMPRESSION: f64 = 0.0158;
const HUE_ROTATION_DEG: f64 = 16.0;
const F_WEIGHT: f64 = 0.7;
const CHROMA_COMPRESSION: f64 = 0.045;

/// Parametric factors and input scale of [`delta_e_din99`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Din99Options {
    /// Use the textiles factors `k_E = 2`, `k_CH = 0.5`.
    pub textiles: bool,
    /// Scale of the input `Lab` values.
    pub scale: DomainRangeScale,
}

impl Din99Options {
    /// Options with the textiles factors.
    pub fn textiles() -> Self {
        Self {
            textiles: true,
            ..Self::default()
        }
    }

    /// Sets the input scale.
    pub fn with_scale(mut self, scale: DomainRangeScale) -> Self {
        self.scale = scale;
        self
    }

    /// `(k_E, k_CH)`.
    #[inline]
    pub fn factors(&self) -> (f64, f64) {
        if self.textiles { (2.0, 0.5) } else { (1.0, 1.0) }
    }
}

/// Converts CIE L*a*b* (reference scale) to DIN99 `L_99, a_99, b_99`.
pub fn lab_to_din99(lab: [f64; 3], k_e: f64, k_ch: f64) -> [f64; 3] {
    let [l, a, b] = lab;
    let (sin_h, cos_h) = HUE_ROTATION_DEG.to_radians().sin_cos();

    let e = cos_h * a + sin_h * b;
    let f = F_WEIGHT * (-sin_h * a + cos_h * b);
    let g = e.hypot(f);
    let h_ef = f.atan2(e);

    let c_99 = (CHROMA_COMPRESSION * g).ln_1p() / (CHROMA_COMPRESSION * k_ch * k_e);
    let l_99 = L_SCALE * (L_COMPRESSION * l).ln_1p() * k_e;

    [l_99, c_99 * h_ef.cos(), c_99 * h_ef.sin()]
}

/// Colour difference `ΔE_99` between two CIE L*a*b* values.
pub fn delta_e_din99(lab_1: [f64; 3], lab_2: [f64; 3], options: Din99Options) -> f64 {
    let (k_e, k_ch) = options.factors();
    let factor = options.scale.to_reference();
    let scaled = |lab: [f64; 3]| lab.map(|v| v * factor);

    euclidean_distance(
        lab_to_din99(scaled(lab_1), k_e, k_ch),
        lab_to_din99(scaled(lab_2), k_e, k_ch),
    )
}

/// `ΔE_99` for index-aligned pairs.
///
/// Extra entries of the longer slice are ignored.
pub fn delta_e_din99_batch(lab_1: &[[f64; 3]], lab_2: &[[f64; 3]], options: Din99Options) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        lab_1
            .par_iter()
            .zip(lab_2.par_iter())
            .map(|(&a, &b)| delta_e_din99(a, b, options))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        lab_1
            .iter()
            .zip(lab_2)
            .map(|(&a, &b)| delta_e_din99(a, b, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LAB_1: [f64; 3] = [60.2574, -34.0099, 36.2677];
    const LAB_2: [f64; 3] = [60.4626, -34.1751, 39.4387];

    #[test]
    fn test_lab_to_din99() {
        let din99 = lab_to_din99(LAB_1, 1.0, 1.0);
        assert_relative_eq!(din99[0], 70.57378525399197, epsilon = 1e-9);
        assert_relative_eq!(din99[1], -13.181890946561813, epsilon = 1e-9);
        assert_relative_eq!(din99[2], 17.985382079517073, epsilon = 1e-9);
    }

    #[test]
    fn test_delta_e() {
        assert_relative_eq!(delta_e_din99(LAB_1, LAB_2, Din99Options::default()), 1.1772166201115488, epsilon = 1e-9);
    }

    #[test]
    fn test_textiles() {
        assert_relative_eq!(delta_e_din99(LAB_1, LAB_2, Din99Options::textiles()), 1.215652775586507, epsilon = 1e-9);
    }

    #[test]
    fn test_large_difference() {
        let d = delta_e_din99(
            [100.0, 21.57210357, 272.2281935],
            [100.0, 426.67945353, 72.39590835],
            Din99Options::default(),
        );
        assert_relative_eq!(d, 66.1119282014399, epsilon = 1e-9);
    }

    #[test]
    fn test_unit_scale() {
        let unit = |lab: [f64; 3]| lab.map(|v| v / 100.0);
        let d = delta_e_din99(unit(LAB_1), unit(LAB_2), Din99Options::default().with_scale(DomainRangeScale::One));
        assert_relative_eq!(d, 1.1772166201115488, epsilon = 1e-9);
    }

    #[test]
    fn test_identity() {
        assert_eq!(delta_e_din99(LAB_1, LAB_1, Din99Options::default()), 0.0);
    }
}

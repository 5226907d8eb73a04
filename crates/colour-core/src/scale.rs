//! Domain-range scale selection.

use serde::{Deserialize, Serialize};

/// Scale in which colourspace values are expressed.
///
/// `Reference` keeps the conventional ranges (`L*` in `[0, 100]`), `One`
/// expects every component normalised to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainRangeScale {
    /// Conventional reference ranges.
    #[default]
    Reference,
    /// Unit ranges.
    One,
}

impl DomainRangeScale {
    /// Factor converting a value in this scale to the reference scale.
    #[inline]
    pub fn to_reference(self) -> f64 {
        match self {
            Self::Reference => 1.0,
            Self::One => 100.0,
        }
    }
}

//! Fixed-point percentages.

use serde::{Serialize, Serializer};

/// A percentage held in tenths of a percent.
///
/// Ratios are rounded half-up to one decimal place with integer arithmetic, so
/// the same inputs always display the same figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u32);

impl Percent {
    /// 0.0%
    pub const ZERO: Percent = Percent(0);

    /// 100.0%
    pub const FULL: Percent = Percent(1000);

    /// `numerator / denominator * 100`, rounded to one decimal.
    ///
    /// A zero denominator yields 0.0.
    pub fn ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        let den = u128::from(denominator);
        let tenths = (u128::from(numerator) * 1000 + den / 2) / den;
        Self(u32::try_from(tenths).unwrap_or(u32::MAX))
    }

    /// Build from a raw tenths value.
    pub fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Raw value in tenths of a percent.
    pub fn tenths(self) -> u32 {
        self.0
    }

    /// Value as a float, e.g. `37.5`.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// `numerator / denominator * 100` rounded half-up to a whole percent.
    ///
    /// Rounds the exact ratio once, so 18.46% gives 18 where rounding the
    /// tenths value would give 19. A zero denominator yields 0.
    pub fn ratio_whole(numerator: u64, denominator: u64) -> u32 {
        if denominator == 0 {
            return 0;
        }
        let den = u128::from(denominator);
        let whole = (u128::from(numerator) * 100 + den / 2) / den;
        u32::try_from(whole).unwrap_or(u32::MAX)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

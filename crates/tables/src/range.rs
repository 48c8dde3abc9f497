use serde::{Deserialize, Serialize};

/// Inclusive `{min, max}` range used by every lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range (both ends inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Linear position inside the range, measured downward from `max`.
    ///
    /// `fraction = 0.0` yields `max` and `fraction = 1.0` yields `min`, so
    /// table rows that list hottest/brightest first map naturally onto
    /// sub-ranks. The fraction is clamped to `[0, 1]`.
    pub fn from_top(&self, fraction: f64) -> f64 {
        let f = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.max - self.span() * f
    }

    /// Logarithmic position inside the range, measured upward from `min`.
    ///
    /// Falls back to linear interpolation when the range touches zero or
    /// goes negative, where a logarithm is undefined.
    pub fn log_lerp(&self, fraction: f64) -> f64 {
        let f = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if self.min <= 0.0 || self.max <= 0.0 {
            return self.min + self.span() * f;
        }
        let (lo, hi) = (self.min.ln(), self.max.ln());
        (lo + (hi - lo) * f).exp().clamp(self.min, self.max)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min.min(self.max), self.max.max(self.min))
    }
}

/// Number of sub-ranks within a class (0–9).
pub const SUBRANKS: u8 = 10;

/// Interpolate a value for a class sub-rank.
///
/// Sub-rank 0 is the hottest/brightest end of the class (the range `max`),
/// and each step moves a tenth of the way towards `min`, so sub-rank 9 stays
/// just above the next class's top value. Sub-ranks above 9 are treated as 9.
pub fn interpolate(range: &ValueRange, subrank: u8) -> f64 {
    let rank = subrank.min(SUBRANKS - 1);
    range.from_top(f64::from(rank) / f64::from(SUBRANKS))
}

/// Interpolate at an arbitrary (possibly jittered) position from the top of
/// the range. `fraction = subrank / 10` reproduces [`interpolate`].
pub fn interpolate_fraction(range: &ValueRange, fraction: f64) -> f64 {
    range.from_top(fraction)
}

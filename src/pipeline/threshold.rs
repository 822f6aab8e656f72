//! Threshold bands used by the variance and entropy filters

use serde::Serialize;

use super::error::FilterError;

/// Closed or open interval `[low, high]` built from two endpoints in any order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdBand {
    low: f64,
    high: f64,
}

impl ThresholdBand {
    /// Build a band from two endpoints. Order does not matter; NaN is rejected.
    pub fn new(a: f64, b: f64) -> Result<Self, FilterError> {
        Self::named("threshold", a, b)
    }

    /// Build a band from a caller-supplied list, which must hold exactly two values.
    ///
    /// `name` labels the band in error messages (e.g. "std", "entropy").
    pub fn from_slice(name: &'static str, values: &[f64]) -> Result<Self, FilterError> {
        match values {
            [a, b] => Self::named(name, *a, *b),
            _ => Err(FilterError::BandArity {
                name,
                got: values.len(),
            }),
        }
    }

    /// `[0, +inf]`
    pub fn non_negative() -> Self {
        Self {
            low: 0.0,
            high: f64::INFINITY,
        }
    }

    fn named(name: &'static str, a: f64, b: f64) -> Result<Self, FilterError> {
        if a.is_nan() || b.is_nan() {
            return Err(FilterError::InvalidBand {
                name,
                low: a,
                high: b,
            });
        }
        Ok(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Whether `value` lies inside the band. NaN is never inside.
    pub fn contains(&self, value: f64, inclusive: bool) -> bool {
        if inclusive {
            value >= self.low && value <= self.high
        } else {
            value > self.low && value < self.high
        }
    }
}

impl Default for ThresholdBand {
    fn default() -> Self {
        Self::non_negative()
    }
}

impl std::fmt::Display for ThresholdBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

//! Filter thresholds shared by the command line, the stages and the report

use serde::Serialize;

use super::error::FilterError;
use super::threshold::ThresholdBand;

/// Default proportion of missing values above which a column is dropped
pub const DEFAULT_NULLS_THRESHOLD: f64 = 0.75;

/// Thresholds for the three cleaning stages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterConfig {
    /// Drop columns whose missing proportion is strictly above this value
    pub nulls_threshold: f64,
    /// Keep numeric columns whose standard deviation lies in this band
    pub std_thresholds: ThresholdBand,
    /// Whether the std band includes its endpoints
    pub variance_inclusive: bool,
    /// Keep categorical columns whose entropy lies in this band
    pub entropy_thresholds: ThresholdBand,
    /// Whether the entropy band includes its endpoints
    pub entropy_inclusive: bool,
    /// Logarithm base for entropy; `None` means natural log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy_base: Option<f64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            nulls_threshold: DEFAULT_NULLS_THRESHOLD,
            std_thresholds: ThresholdBand::non_negative(),
            variance_inclusive: false,
            entropy_thresholds: ThresholdBand::non_negative(),
            entropy_inclusive: false,
            entropy_base: None,
        }
    }
}

impl FilterConfig {
    /// Reject configurations the stages cannot score meaningfully.
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_nulls_threshold(self.nulls_threshold)?;
        if let Some(base) = self.entropy_base {
            validate_log_base(base)?;
        }
        Ok(())
    }
}

/// Thresholds of 1 or more are allowed and simply disable the stage.
pub fn validate_nulls_threshold(threshold: f64) -> Result<(), FilterError> {
    if threshold.is_nan() {
        return Err(FilterError::NonFiniteNullsThreshold(threshold));
    }
    if threshold < 0.0 {
        return Err(FilterError::NegativeNullsThreshold(threshold));
    }
    Ok(())
}

pub fn validate_log_base(base: f64) -> Result<(), FilterError> {
    if !base.is_finite() || base <= 0.0 || base == 1.0 {
        return Err(FilterError::InvalidLogBase(base));
    }
    Ok(())
}

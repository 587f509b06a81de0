//! FILENAME: engine/src/config.rs
//! PURPOSE: Tunable settings for evaluation and the numeric calculus forms.
//! CONTEXT: Every field has a default, so an empty JSON object is a valid
//! configuration. `validate` runs on every construction path that accepts
//! outside input.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::log_error;
use crate::math::AngleMode;

pub const DEFAULT_DERIVATIVE_STEP: f64 = 1e-6;
pub const DEFAULT_INTEGRAL_SUBINTERVALS: u32 = 1000;
pub const DEFAULT_LIMIT_OFFSET: f64 = 1e-7;
pub const DEFAULT_MAX_SUMMATION_TERMS: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Angle unit for trig functions in top-level expressions.
    /// Calculus sub-expressions always evaluate in radians.
    pub angle_mode: AngleMode,
    /// Step `h` of the central difference used by `diff`.
    pub derivative_step: f64,
    /// Simpson subinterval count used by `int`. Must be even.
    pub integral_subintervals: u32,
    /// Distance from the point at which `lim` samples.
    pub limit_offset: f64,
    /// Largest `end - start + 1` accepted by `sum`.
    pub max_summation_terms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            angle_mode: AngleMode::default(),
            derivative_step: DEFAULT_DERIVATIVE_STEP,
            integral_subintervals: DEFAULT_INTEGRAL_SUBINTERVALS,
            limit_offset: DEFAULT_LIMIT_OFFSET,
            max_summation_terms: DEFAULT_MAX_SUMMATION_TERMS,
        }
    }
}

impl EngineConfig {
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    pub fn with_integral_subintervals(mut self, n: u32) -> Self {
        self.integral_subintervals = n;
        self
    }

    pub fn with_max_summation_terms(mut self, max: u64) -> Self {
        self.max_summation_terms = max;
        self
    }

    /// Parses settings from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(e) = &result {
            log_error!("CONFIG", "rejected engine settings: {}", e);
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !(self.derivative_step.is_finite() && self.derivative_step > 0.0) {
            return Err(invalid(
                "derivative_step",
                format!("must be a positive finite number, got {}", self.derivative_step),
            ));
        }
        if !(self.limit_offset.is_finite() && self.limit_offset > 0.0) {
            return Err(invalid(
                "limit_offset",
                format!("must be a positive finite number, got {}", self.limit_offset),
            ));
        }
        if self.integral_subintervals == 0 || self.integral_subintervals % 2 != 0 {
            return Err(invalid(
                "integral_subintervals",
                format!("must be even and non-zero, got {}", self.integral_subintervals),
            ));
        }
        if self.max_summation_terms == 0 {
            return Err(invalid("max_summation_terms", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidSetting { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.angle_mode, AngleMode::Degrees);
        assert_eq!(config.integral_subintervals, 1000);
    }

    #[test]
    fn rejects_odd_subinterval_count() {
        let config = EngineConfig::default().with_integral_subintervals(999);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSetting { field: "integral_subintervals", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_steps() {
        let mut config = EngineConfig::default();
        config.derivative_step = 0.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.limit_offset = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_term_cap() {
        let config = EngineConfig::default().with_max_summation_terms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "angle_mode": "radians" }"#).unwrap();
        assert_eq!(config.angle_mode, AngleMode::Radians);
        assert_eq!(config.derivative_step, DEFAULT_DERIVATIVE_STEP);
        assert_eq!(config.max_summation_terms, DEFAULT_MAX_SUMMATION_TERMS);
    }

    #[test]
    fn json_round_trip() {
        let config = EngineConfig::default().with_integral_subintervals(200);
        let json = config.to_json().unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn json_is_validated() {
        let err = EngineConfig::from_json(r#"{ "integral_subintervals": 3 }"#).unwrap_err();
        assert!(err.to_string().contains("integral_subintervals"));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            EngineConfig::from_json("{ not json"),
            Err(ConfigError::Malformed(_))
        ));
    }
}

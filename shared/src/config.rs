use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::intake::CountBounds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("image bounds must satisfy 1 <= min <= max (got {min}..={max})")]
    InvalidBounds { min: usize, max: usize },
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
}

/// Runtime knobs for the forecast page.
///
/// Every field has a default, so a partial JSON object only overrides what
/// it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub min_images: usize,
    pub max_images: usize,
    pub tick_interval_ms: u32,
    pub simulated_latency_ms: u32,
    pub horizon_step_hours: u32,
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_images: 4,
            max_images: 6,
            tick_interval_ms: 500,
            simulated_latency_ms: 3000,
            horizon_step_hours: 3,
            notice_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds()?;
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "tick_interval_ms" });
        }
        if self.horizon_step_hours == 0 {
            return Err(ConfigError::ZeroInterval { field: "horizon_step_hours" });
        }
        Ok(())
    }

    pub fn bounds(&self) -> Result<CountBounds, ConfigError> {
        CountBounds::new(self.min_images, self.max_images)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(u64::from(self.simulated_latency_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "max_images": 8 }"#).unwrap();
        assert_eq!(config.min_images, 4);
        assert_eq!(config.max_images, 8);
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.simulated_latency(), Duration::from_millis(3000));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = AppConfig::from_json(r#"{ "min_images": 7, "max_images": 6 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { min: 7, max: 6 }));
    }

    #[test]
    fn zero_minimum_is_rejected() {
        let err = AppConfig::from_json(r#"{ "min_images": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { min: 0, .. }));
    }

    #[test]
    fn zero_tick_is_rejected() {
        let err = AppConfig::from_json(r#"{ "tick_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval { field: "tick_interval_ms" }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(AppConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }
}

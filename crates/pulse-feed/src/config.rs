//! Feed configuration.

use crate::error::{FeedError, FeedResult};
use serde::{Deserialize, Serialize};

/// Configuration for one feed instance.
///
/// Constructed once per feed and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Tick interval in milliseconds. Must be >= 1.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Maximum number of records retained. Must be >= 1.
    #[serde(default = "default_cap")]
    pub cap: usize,
    /// Probability in [0, 1] that a tick invokes the incremental producer.
    #[serde(default = "default_emit_probability")]
    pub emit_probability: f64,
}

fn default_interval_ms() -> u64 {
    3_000
}

fn default_cap() -> usize {
    50
}

fn default_emit_probability() -> f64 {
    0.3
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            cap: default_cap(),
            emit_probability: default_emit_probability(),
        }
    }
}

impl FeedConfig {
    /// Validate the configuration. Called by `LiveFeed::start`.
    pub fn validate(&self) -> FeedResult<()> {
        if self.interval_ms < 1 {
            return Err(FeedError::InvalidConfig(
                "interval_ms must be >= 1".to_string(),
            ));
        }
        if self.cap < 1 {
            return Err(FeedError::InvalidConfig("cap must be >= 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.emit_probability) {
            return Err(FeedError::InvalidConfig(format!(
                "emit_probability must be in [0, 1], got {}",
                self.emit_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FeedConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = FeedConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_cap() {
        let config = FeedConfig {
            cap: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        for p in [-0.1, 1.1, f64::NAN] {
            let config = FeedConfig {
                emit_probability: p,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "p = {p} should be rejected");
        }
    }

    #[test]
    fn test_probability_bounds_are_inclusive() {
        for p in [0.0, 1.0] {
            let config = FeedConfig {
                emit_probability: p,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }
}

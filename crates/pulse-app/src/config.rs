//! Application configuration.

use crate::error::{AppError, AppResult};
use pulse_dashboard::ServerConfig;
use pulse_feed::FeedConfig;
use pulse_mock::MockConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Feed wiring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// Activity log feed: 3s ticks, 50 record cap, 30% emit chance.
    #[serde(default = "default_activity_feed")]
    pub activity: FeedConfig,
    /// Stats overview refresh interval (full refetch), milliseconds.
    #[serde(default = "default_stats_refresh_ms")]
    pub stats_refresh_ms: u64,
}

fn default_activity_feed() -> FeedConfig {
    FeedConfig {
        interval_ms: 3_000,
        cap: 50,
        emit_probability: 0.3,
    }
}

fn default_stats_refresh_ms() -> u64 {
    5_000
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            activity: default_activity_feed(),
            stats_refresh_ms: default_stats_refresh_ms(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dashboard HTTP server.
    #[serde(default)]
    pub server: ServerConfig,
    /// Mock data source.
    #[serde(default)]
    pub mock: MockConfig,
    /// Feed wiring.
    #[serde(default)]
    pub feeds: FeedsConfig,
}

impl AppConfig {
    /// Load configuration: `PULSE_CONFIG` env var, falling back to
    /// `config/default.toml`, falling back to defaults.
    pub fn load() -> AppResult<Self> {
        let config_path =
            std::env::var("PULSE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_timings() {
        let config = AppConfig::default();
        assert_eq!(config.feeds.activity.interval_ms, 3_000);
        assert_eq!(config.feeds.activity.cap, 50);
        assert_eq!(config.feeds.stats_refresh_ms, 5_000);
        assert!(config.server.enabled);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.feeds.activity.cap, config.feeds.activity.cap);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[server]\nport = 9090\n").unwrap();
        assert_eq!(parsed.server.port, 9090);
        assert_eq!(parsed.feeds.activity.interval_ms, 3_000);
        assert!(parsed.mock.simulate_latency);
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let result = AppConfig::from_file("/nonexistent/path.toml");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}

//! Stats overview types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point in the 7-day usage trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day label ("Mon" .. "Sun").
    pub name: String,
    /// API calls for that day.
    pub calls: u32,
    /// Errors for that day.
    pub errors: u32,
}

/// Aggregate stats shown on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOverview {
    /// Total API calls across the window.
    pub total_calls: u64,
    /// Currently active users.
    pub active_users: u32,
    /// System health score, 0-100.
    pub health_score: u8,
    /// Daily trend series, oldest first.
    pub trends: Vec<TrendPoint>,
    /// When this overview was generated.
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_serialization() {
        let overview = StatsOverview {
            total_calls: 72_000,
            active_users: 340,
            health_score: 97,
            trends: vec![TrendPoint {
                name: "Mon".to_string(),
                calls: 4200,
                errors: 31,
            }],
            generated_at: Utc::now(),
        };

        let json = serde_json::to_string(&overview).unwrap();
        assert!(json.contains("\"total_calls\":72000"));
        assert!(json.contains("\"health_score\":97"));
    }
}

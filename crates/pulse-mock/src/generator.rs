//! Random record generators.
//!
//! Template-pool generation: pick from fixed pools, splice in random
//! figures. Pools are small on purpose; the dashboard only needs plausible
//! variety, not realism.

use chrono::{Duration, Utc};
use pulse_core::{LogEntry, LogLevel, StatsOverview, TrendPoint, User, UserRole, UserStatus};
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Radia", "Ken", "Margaret", "Dennis",
    "Frances", "John", "Katherine", "Linus", "Annie",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Perlman", "Thompson",
    "Hamilton", "Ritchie", "Allen", "Backus", "Johnson", "Torvalds", "Easley",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.test", "corp.internal"];

const LOG_PHRASES: &[&str] = &[
    "Use the digital SSL protocol, then you can connect the cross-platform firewall",
    "Backing up the driver won't do anything, we need to compress the neural bus",
    "The SQL interface is down, index the back-end pixel so we can quantify the matrix",
    "Deployment pipeline finished for service gateway-7",
    "Cache invalidation completed across 3 regions",
    "Scheduled certificate rotation applied to edge nodes",
    "Replica lag recovered on shard db-04",
];

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn pick<'a>(pool: &[&'a str]) -> &'a str {
    pool[fastrand::usize(..pool.len())]
}

/// Generate one random user record.
pub fn random_user() -> User {
    let first = pick(FIRST_NAMES);
    let last = pick(LAST_NAMES);
    let id = Uuid::new_v4();
    let roles = [UserRole::Admin, UserRole::Editor, UserRole::Viewer];
    let statuses = [UserStatus::Active, UserStatus::Inactive, UserStatus::Pending];

    User {
        id,
        name: format!("{first} {last}"),
        email: format!(
            "{}.{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            pick(EMAIL_DOMAINS)
        ),
        role: roles[fastrand::usize(..roles.len())],
        status: statuses[fastrand::usize(..statuses.len())],
        avatar_url: format!("https://avatars.example.com/{id}.png"),
        // "Recently active": sometime within the last three days.
        last_active: Utc::now() - Duration::minutes(fastrand::i64(0..3 * 24 * 60)),
    }
}

/// Generate a batch of random users.
pub fn random_users(count: usize) -> Vec<User> {
    (0..count).map(|_| random_user()).collect()
}

/// Generate the stats overview with a 7-day trend series.
pub fn stats_overview() -> StatsOverview {
    let trends = DAY_LABELS
        .iter()
        .map(|name| TrendPoint {
            name: name.to_string(),
            calls: fastrand::u32(1_000..=5_000),
            errors: fastrand::u32(10..=200),
        })
        .collect();

    StatsOverview {
        total_calls: fastrand::u64(50_000..=100_000),
        active_users: fastrand::u32(100..=500),
        health_score: fastrand::u8(85..=100),
        trends,
        generated_at: Utc::now(),
    }
}

/// Generate one log entry from the phrase pool.
pub fn random_log() -> LogEntry {
    let levels = [LogLevel::Info, LogLevel::Warning, LogLevel::Error];
    LogEntry::new(pick(LOG_PHRASES), levels[fastrand::usize(..levels.len())])
}

/// Generate the synthetic incremental log entry.
///
/// Auto-scaling message with a CPU figure in [70.0, 90.0); warning at
/// probability 0.1, info otherwise.
pub fn synthetic_log() -> LogEntry {
    let cpu = 70.0 + fastrand::f64() * 20.0;
    let level = if fastrand::f64() < 0.1 {
        LogLevel::Warning
    } else {
        LogLevel::Info
    };
    LogEntry::new(format!("Auto-scaling trigger: CPU usage > {cpu:.1}%"), level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_have_unique_ids() {
        let users = random_users(20);
        assert_eq!(users.len(), 20);

        let mut ids: Vec<_> = users.iter().map(|u| u.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_user_email_is_well_formed() {
        let user = random_user();
        assert!(user.email.contains('@'));
        assert_eq!(user.email, user.email.to_lowercase());
    }

    #[test]
    fn test_stats_within_bounds() {
        let stats = stats_overview();
        assert!((50_000..=100_000).contains(&stats.total_calls));
        assert!((100..=500).contains(&stats.active_users));
        assert!((85..=100).contains(&stats.health_score));
        assert_eq!(stats.trends.len(), 7);
        assert_eq!(stats.trends[0].name, "Mon");
        for point in &stats.trends {
            assert!((1_000..=5_000).contains(&point.calls));
            assert!((10..=200).contains(&point.errors));
        }
    }

    #[test]
    fn test_synthetic_log_shape() {
        for _ in 0..50 {
            let log = synthetic_log();
            assert!(log.message.starts_with("Auto-scaling trigger: CPU usage > "));
            assert!(matches!(log.level, LogLevel::Info | LogLevel::Warning));
        }
    }
}

//! Feed record wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One unit of feed data: unique id, creation timestamp, opaque payload.
///
/// Ids are unique per record; timestamps are assigned at creation and are
/// monotonic within a single feed's own emissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRecord<P> {
    /// Unique record id.
    pub id: Uuid,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Source-defined payload.
    pub payload: P,
}

impl<P> FeedRecord<P> {
    /// Create a record stamped with the current time.
    pub fn new(payload: P) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Create a record with an explicit timestamp (backfilled initial data).
    pub fn with_timestamp(payload: P, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = FeedRecord::new("a");
        let b = FeedRecord::new("a");
        assert_ne!(a.id, b.id);
    }
}

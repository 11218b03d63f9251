//! Temporal classification of event snapshots.
//!
//! Partitions a snapshot into upcoming and recent display lists. An event
//! scheduled exactly at `now` counts as upcoming; the two lists are disjoint
//! and, together with unscheduled events, cover the snapshot exactly once.

use chrono::{DateTime, Utc};

use crate::types::EventRecord;

/// Default number of events shown per list.
pub const DISPLAY_LIMIT: usize = 3;

/// Upcoming and recent display lists carved out of one snapshot.
#[derive(Debug, Clone, Default)]
pub struct EventPartitions {
    /// Events at or after `now`, soonest first
    pub upcoming: Vec<EventRecord>,
    /// Events strictly before `now`, most recent first
    pub recent: Vec<EventRecord>,
}

/// Partition a snapshot around `now`.
///
/// Upcoming events sort ascending by date, recent events descending; each list
/// is truncated to `limit`, keeping the events closest to `now` in the
/// respective direction. Unscheduled events appear in neither list.
pub fn partition_events(
    events: &[EventRecord],
    now: DateTime<Utc>,
    limit: usize,
) -> EventPartitions {
    let mut upcoming: Vec<EventRecord> = events
        .iter()
        .filter(|e| e.is_upcoming(now))
        .cloned()
        .collect();
    let mut recent: Vec<EventRecord> = events.iter().filter(|e| e.is_past(now)).cloned().collect();

    upcoming.sort_by_key(|e| e.event_date);
    recent.sort_by_key(|e| std::cmp::Reverse(e.event_date));

    upcoming.truncate(limit);
    recent.truncate(limit);

    EventPartitions { upcoming, recent }
}

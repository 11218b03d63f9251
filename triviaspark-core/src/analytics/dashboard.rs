//! Dashboard statistics for the organizer view.
//!
//! Aggregates a fetched event snapshot into the headline numbers shown above
//! the upcoming/recent lists. Backend-computed figures live in
//! [`crate::types::DashboardInsights`]; these are the client-side counts over
//! the snapshot itself.

use chrono::{DateTime, Utc};

use crate::format;
use crate::types::{EventRecord, EventType};

/// Snapshot statistics for the dashboard header.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    /// Total events in the snapshot
    pub event_count: usize,
    /// Events at or after `now`
    pub upcoming_count: usize,
    /// Events strictly before `now`
    pub past_count: usize,
    /// Events without a scheduled date
    pub unscheduled_count: usize,
    /// Counts per event type: (wine_dinner, corporate, party, other)
    pub by_type: [usize; 4],
    /// Timestamp of the soonest upcoming event, if any
    pub next_event_at: Option<DateTime<Utc>>,
}

impl DashboardStats {
    /// Compute statistics over a snapshot relative to `now`.
    pub fn compute(events: &[EventRecord], now: DateTime<Utc>) -> Self {
        let mut stats = DashboardStats {
            event_count: events.len(),
            ..Default::default()
        };

        for event in events {
            match event.event_type {
                EventType::WineDinner => stats.by_type[0] += 1,
                EventType::Corporate => stats.by_type[1] += 1,
                EventType::Party => stats.by_type[2] += 1,
                EventType::Other => stats.by_type[3] += 1,
            }

            match event.event_date {
                Some(date) if date >= now => {
                    stats.upcoming_count += 1;
                    if stats.next_event_at.map_or(true, |next| date < next) {
                        stats.next_event_at = Some(date);
                    }
                }
                Some(_) => stats.past_count += 1,
                None => stats.unscheduled_count += 1,
            }
        }

        stats
    }

    /// Format the next upcoming event for display (e.g., "Tomorrow").
    pub fn format_next_event(&self, now: DateTime<Utc>) -> String {
        match self.next_event_at {
            Some(date) => format::format_upcoming(date, now),
            None => "none scheduled".to_string(),
        }
    }

    /// Count for a single event type.
    pub fn count_for(&self, event_type: EventType) -> usize {
        match event_type {
            EventType::WineDinner => self.by_type[0],
            EventType::Corporate => self.by_type[1],
            EventType::Party => self.by_type[2],
            EventType::Other => self.by_type[3],
        }
    }
}

//! Core domain types for TriviaSpark events
//!
//! These types represent the event snapshot fetched from the TriviaSpark
//! backend. Records are immutable once fetched; classification and display
//! formatting re-evaluate on every fetch.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Event** | A scheduled (or not yet scheduled) trivia night an organizer hosts |
//! | **Upcoming event** | An event whose timestamp is at or after the reference instant |
//! | **Recent event** | An event whose timestamp is strictly before the reference instant |
//! | **Unscheduled event** | An event with no timestamp; it is neither upcoming nor recent |
//! | **Join code** | The `trivia-xxxxxxxx` token participants scan to join an event |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Events
// ============================================

/// Kind of trivia event, used for icon/color selection in display layers.
///
/// This carries no business logic; unknown wire values map to [`EventType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Wine dinner pairing event
    WineDinner,
    /// Corporate team event
    Corporate,
    /// Private party
    Party,
    /// Anything else
    #[serde(other)]
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::WineDinner => "wine_dinner",
            EventType::Corporate => "corporate",
            EventType::Party => "party",
            EventType::Other => "other",
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "wine_dinner" => EventType::WineDinner,
            "corporate" => EventType::Corporate,
            "party" => EventType::Party,
            _ => EventType::Other,
        })
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trivia event as seen by display and classification layers.
///
/// The backend owns creation and mutation; this side treats a fetched
/// collection as a read-only snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier (opaque, assigned by the backend)
    pub id: String,
    /// Display title
    pub title: String,
    /// Event kind, for display selection only
    pub event_type: EventType,
    /// Scheduled timestamp; `None` means "unscheduled"
    pub event_date: Option<DateTime<Utc>>,
    /// Participant cap (display only)
    pub max_participants: Option<u32>,
    /// Question difficulty label (display only)
    pub difficulty: Option<String>,
    /// Participant join code (`trivia-` + 8 lowercase hex chars), if issued
    pub join_code: Option<String>,
}

impl EventRecord {
    /// True when the event has a scheduled timestamp at or after `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.event_date.is_some_and(|date| date >= now)
    }

    /// True when the event has a scheduled timestamp strictly before `now`.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.event_date.is_some_and(|date| date < now)
    }
}

// ============================================
// Dashboard insights
// ============================================

/// Aggregate figures computed by the backend, decoded verbatim from
/// `GET /api/dashboard/insights`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardInsights {
    /// Total events this organizer has created
    #[serde(default)]
    pub total_events: i64,
    /// Events scheduled in the future
    #[serde(default)]
    pub upcoming_events: i64,
    /// Participants across all events
    #[serde(default)]
    pub total_participants: i64,
    /// Questions generated across all events
    #[serde(default)]
    pub total_questions: i64,
}

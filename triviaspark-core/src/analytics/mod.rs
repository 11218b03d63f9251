//! Event snapshot analytics
//!
//! Pure computations over a fetched event snapshot: temporal classification
//! into upcoming/recent display lists, and the aggregate statistics behind the
//! organizer dashboard. Nothing here does I/O; callers fetch a snapshot via
//! [`crate::api::EventsClient`] and pass `now` explicitly.

mod dashboard;
mod schedule;

pub use dashboard::DashboardStats;
pub use schedule::{partition_events, EventPartitions, DISPLAY_LIMIT};

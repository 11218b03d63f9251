//! TriviaSpark REST API client
//!
//! Fetches event snapshots and dashboard insights from the TriviaSpark
//! backend. The backend owns the wire schema; this side decodes it and
//! validates event dates at the boundary, so malformed records never reach the
//! classifier silently — they are dropped with an explicit warning.
//!
//! ## Usage
//!
//! Point the client at a backend in `~/.config/triviaspark/config.toml`:
//!
//! ```toml
//! [api]
//! base_url = "https://triviaspark.example.com"
//! session_cookie = "connect.sid=s%3Axxxxxxxx"
//! ```

mod client;
mod dto;

pub use client::EventsClient;
pub use dto::{EventDto, EventSnapshot};

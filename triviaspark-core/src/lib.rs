//! # triviaspark-core
//!
//! Core library for TriviaSpark event tools - live trivia event classification
//! and display logic.
//!
//! This library provides:
//! - Domain types for events and dashboard insights
//! - Temporal classification of event snapshots (upcoming vs recent)
//! - Relative and timezone-aware date formatting
//! - Join-code and QR URL helpers
//! - REST API client for the TriviaSpark backend
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows in one direction:
//! - **Fetch:** the API client pulls an event snapshot from the backend,
//!   validating event dates at the boundary
//! - **Classify:** pure functions partition the snapshot around an explicit
//!   `now` into upcoming and recent display lists
//! - **Format:** display strings are rendered relative to `now` or as
//!   absolute dates in the fixed event timezone
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use triviaspark_core::analytics::{partition_events, DISPLAY_LIMIT};
//! use triviaspark_core::{Config, EventsClient};
//!
//! # async fn run() -> triviaspark_core::Result<()> {
//! let config = Config::load()?;
//! let client = EventsClient::new(config.api)?;
//!
//! let snapshot = client.list_events().await?;
//! let lists = partition_events(&snapshot.events, Utc::now(), DISPLAY_LIMIT);
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use api::{EventsClient, EventSnapshot};
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod join;
pub mod logging;
pub mod types;

//! Date formatting helpers shared across display surfaces.
//!
//! All absolute rendering happens in the fixed event timezone
//! ([`EVENT_TIMEZONE`], US Central) regardless of the viewer's locale.
//! Relative rendering is a pure function of `(timestamp, now)`; callers pass
//! `now` explicitly so behavior stays deterministic and testable.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// The single named timezone used for all absolute-date display formatting.
pub const EVENT_TIMEZONE: Tz = chrono_tz::America::Chicago;

const MS_PER_DAY: i64 = 86_400_000;

/// Whole days between two instants, partial days rounding up.
pub fn days_between(ts: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (ts - now).num_milliseconds().abs();
    (ms + MS_PER_DAY - 1) / MS_PER_DAY
}

/// Format an upcoming timestamp relative to `now` (e.g., "Tomorrow", "In 2 weeks").
///
/// Timestamps more than 30 days out render as a spelled-out absolute date.
pub fn format_upcoming(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = days_between(ts, now);

    if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Tomorrow".to_string()
    } else if days <= 7 {
        format!("In {} days", days)
    } else if days <= 30 {
        let weeks = round_weeks(days);
        format!("In {} {}", weeks, week_label(weeks))
    } else {
        ts.with_timezone(&EVENT_TIMEZONE)
            .format("%B %-d, %Y")
            .to_string()
    }
}

/// Format a past timestamp relative to `now` (e.g., "Yesterday", "3 weeks ago").
///
/// Timestamps more than 30 days back render as a numeric date.
pub fn format_recent(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = days_between(ts, now);

    if days <= 1 {
        "Yesterday".to_string()
    } else if days <= 7 {
        format!("{} days ago", days)
    } else if days <= 30 {
        let weeks = round_weeks(days);
        format!("{} {} ago", weeks, week_label(weeks))
    } else {
        format_event_date(ts)
    }
}

fn round_weeks(days: i64) -> i64 {
    ((days as f64) / 7.0).round() as i64
}

fn week_label(weeks: i64) -> &'static str {
    if weeks == 1 {
        "week"
    } else {
        "weeks"
    }
}

/// Numeric date (`MM/DD/YYYY`) in the event timezone.
pub fn format_event_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&EVENT_TIMEZONE)
        .format("%m/%d/%Y")
        .to_string()
}

/// Numeric date plus 12-hour time in the event timezone.
pub fn format_event_date_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&EVENT_TIMEZONE)
        .format("%m/%d/%Y %-I:%M %p")
        .to_string()
}

/// 12-hour time in the event timezone.
pub fn format_event_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&EVENT_TIMEZONE)
        .format("%-I:%M %p")
        .to_string()
}

/// HTML date-input-compatible string (`YYYY-MM-DD`) in the event timezone.
pub fn format_date_input(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&EVENT_TIMEZONE)
        .format("%Y-%m-%d")
        .to_string()
}

/// Build a UTC timestamp from a `YYYY-MM-DD` date string and an optional
/// 12-hour time string (e.g. "7:00 PM"), anchored to the event timezone.
///
/// The conversion goes through the tz database, so the offset is correct on
/// both sides of a daylight-saving transition. A local time that does not
/// exist (or exists twice) on the given date is an error.
pub fn event_timestamp(date: &str, time: Option<&str>) -> Result<DateTime<Utc>> {
    let date_part = chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
        Error::InvalidDate {
            value: date.to_string(),
            reason: e.to_string(),
        }
    })?;

    let time_part = match time {
        Some(t) => {
            NaiveTime::parse_from_str(t.trim(), "%I:%M %p").map_err(|e| Error::InvalidDate {
                value: t.to_string(),
                reason: e.to_string(),
            })?
        }
        None => NaiveTime::MIN,
    };

    let local = date_part.and_time(time_part);
    match EVENT_TIMEZONE.from_local_datetime(&local) {
        chrono::LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        _ => Err(Error::InvalidDate {
            value: format!("{} {}", date, time.unwrap_or("")),
            reason: "local time is ambiguous or nonexistent in the event timezone".to_string(),
        }),
    }
}

//! Wire types for the TriviaSpark events API
//!
//! The backend serializes records in camelCase with loosely typed fields:
//! numeric or string ids, and `eventDate` as a string in several shapes. This
//! module normalizes all of that into [`EventRecord`] snapshots, rejecting
//! unparseable dates with an explicit warning instead of letting them sort
//! into neither display list.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::{self, EVENT_TIMEZONE};
use crate::types::{EventRecord, EventType};

/// An event as the backend serializes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub qr_code: Option<String>,
}

impl EventDto {
    /// Convert to the domain model, validating the event date.
    ///
    /// A missing date is a valid "unscheduled" record; a present but
    /// unparseable date is an error.
    pub fn to_record(&self) -> Result<EventRecord> {
        let event_date = match self.event_date.as_deref() {
            Some(raw) => Some(parse_event_date(raw)?),
            None => None,
        };

        let event_type = self
            .event_type
            .as_deref()
            .unwrap_or("other")
            .parse::<EventType>()
            .unwrap_or(EventType::Other);

        Ok(EventRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            event_type,
            event_date,
            max_participants: self.max_participants,
            difficulty: self.difficulty.clone(),
            join_code: self.qr_code.clone(),
        })
    }
}

/// A decoded event collection plus the records that failed validation.
#[derive(Debug, Default)]
pub struct EventSnapshot {
    /// Records that passed date validation
    pub events: Vec<EventRecord>,
    /// One message per dropped record
    pub warnings: Vec<String>,
}

impl EventSnapshot {
    /// Build a snapshot from wire records, dropping and flagging bad dates.
    pub fn from_dtos(dtos: Vec<EventDto>) -> Self {
        let mut snapshot = EventSnapshot::default();

        for dto in &dtos {
            match dto.to_record() {
                Ok(record) => snapshot.events.push(record),
                Err(e) => {
                    let warning = format!("dropped event '{}': {}", dto.id, e);
                    tracing::warn!(event_id = %dto.id, error = %e, "Dropping event with invalid date");
                    snapshot.warnings.push(warning);
                }
            }
        }

        snapshot
    }
}

/// Parse a wire timestamp.
///
/// RFC 3339 strings carry their own offset; naive forms are anchored to the
/// event timezone through the tz database.
pub(crate) fn parse_event_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return match EVENT_TIMEZONE.from_local_datetime(&naive) {
                chrono::LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
                _ => Err(Error::InvalidDate {
                    value: raw.to_string(),
                    reason: "local time is ambiguous or nonexistent in the event timezone"
                        .to_string(),
                }),
            };
        }
    }

    // Date-only form, midnight in the event timezone
    format::event_timestamp(raw, None)
}

fn deserialize_id<'de, D>(d: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_event() {
        let dto: EventDto = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Wine & Wisdom",
                "eventType": "wine_dinner",
                "eventDate": "2025-06-14T19:00:00-05:00",
                "maxParticipants": 40,
                "difficulty": "medium",
                "qrCode": "trivia-1a2b3c4d"
            }"#,
        )
        .unwrap();

        assert_eq!(dto.id, "42");
        let record = dto.to_record().unwrap();
        assert_eq!(record.event_type, EventType::WineDinner);
        assert_eq!(record.join_code.as_deref(), Some("trivia-1a2b3c4d"));
        assert_eq!(
            record.event_date,
            Some(Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_deserialize_minimal_event() {
        let dto: EventDto =
            serde_json::from_str(r#"{"id": "evt-7", "title": "Pub quiz"}"#).unwrap();

        let record = dto.to_record().unwrap();
        assert_eq!(record.id, "evt-7");
        assert_eq!(record.event_type, EventType::Other);
        assert!(record.event_date.is_none());
    }

    #[test]
    fn test_parse_event_date_forms() {
        // RFC 3339 with offset
        let dt = parse_event_date("2025-01-10T18:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 1, 10, 18, 0, 0).unwrap());

        // Naive datetime anchored to Central (CST, UTC-6 in January)
        let dt = parse_event_date("2025-01-10 19:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 1, 11, 1, 0, 0).unwrap());

        // Date-only, midnight Central
        let dt = parse_event_date("2025-01-10").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 1, 10, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_snapshot_flags_invalid_dates() {
        let dtos: Vec<EventDto> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Good", "eventDate": "2025-01-10T18:00:00Z"},
                {"id": 2, "title": "Bad", "eventDate": "next friday-ish"},
                {"id": 3, "title": "Unscheduled"}
            ]"#,
        )
        .unwrap();

        let snapshot = EventSnapshot::from_dtos(dtos);
        assert_eq!(snapshot.events.len(), 2);
        assert_eq!(snapshot.warnings.len(), 1);
        assert!(snapshot.warnings[0].contains("'2'"));
        assert!(snapshot.events.iter().any(|e| e.event_date.is_none()));
    }
}

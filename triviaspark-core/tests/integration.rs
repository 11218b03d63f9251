//! Integration tests for the fetch-decode-classify-format flow
//!
//! These tests decode backend-shaped JSON payloads and drive them through the
//! same pipeline the CLI uses: snapshot conversion, temporal partitioning, and
//! display formatting against a fixed reference instant.

use chrono::{DateTime, TimeZone, Utc};
use triviaspark_core::analytics::{partition_events, DashboardStats, DISPLAY_LIMIT};
use triviaspark_core::api::{EventDto, EventSnapshot};
use triviaspark_core::format;
use triviaspark_core::join;

/// Fixed reference instant: 2025-01-10T00:00:00Z
fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap()
}

fn decode_snapshot(json: &str) -> EventSnapshot {
    let dtos: Vec<EventDto> = serde_json::from_str(json).expect("payload should decode");
    EventSnapshot::from_dtos(dtos)
}

const EVENTS_PAYLOAD: &str = r#"[
    {
        "id": 1,
        "title": "Wine & Wisdom",
        "eventType": "wine_dinner",
        "eventDate": "2025-01-11T00:00:00Z",
        "maxParticipants": 40,
        "difficulty": "medium",
        "qrCode": "trivia-1a2b3c4d"
    },
    {
        "id": 2,
        "title": "Acme Corp Quiz Night",
        "eventType": "corporate",
        "eventDate": "2025-01-17T00:00:00Z",
        "maxParticipants": 120
    },
    {
        "id": 3,
        "title": "Spring Gala Trivia",
        "eventType": "party",
        "eventDate": "2025-02-20T06:00:00Z"
    },
    {
        "id": 4,
        "title": "Trivia Marathon",
        "eventType": "party",
        "eventDate": "2025-03-01T00:00:00Z"
    },
    {
        "id": 5,
        "title": "New Year Kickoff",
        "eventType": "party",
        "eventDate": "2025-01-09T00:00:00Z"
    },
    {
        "id": 6,
        "title": "Holiday Special",
        "eventType": "wine_dinner",
        "eventDate": "2025-01-03T00:00:00Z"
    },
    {
        "id": 7,
        "title": "Autumn Closer",
        "eventType": "corporate",
        "eventDate": "2024-12-01T06:00:00Z"
    },
    {
        "id": 8,
        "title": "Pilot Night",
        "eventType": "party",
        "eventDate": "2024-11-15T06:00:00Z"
    },
    {
        "id": 9,
        "title": "Venue TBD",
        "eventType": "party"
    }
]"#;

#[test]
fn full_pipeline_partitions_and_truncates() {
    let snapshot = decode_snapshot(EVENTS_PAYLOAD);
    assert!(snapshot.warnings.is_empty());
    assert_eq!(snapshot.events.len(), 9);

    let now = reference_now();
    let lists = partition_events(&snapshot.events, now, DISPLAY_LIMIT);

    // 4 upcoming and 4 past qualify; each list truncates to the 3 closest
    let upcoming_ids: Vec<_> = lists.upcoming.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(upcoming_ids, ["1", "2", "3"]);

    let recent_ids: Vec<_> = lists.recent.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(recent_ids, ["5", "6", "7"]);

    // The unscheduled event appears in neither list
    assert!(!lists.upcoming.iter().any(|e| e.id == "9"));
    assert!(!lists.recent.iter().any(|e| e.id == "9"));
}

#[test]
fn full_pipeline_formats_display_strings() {
    let snapshot = decode_snapshot(EVENTS_PAYLOAD);
    let now = reference_now();
    let lists = partition_events(&snapshot.events, now, DISPLAY_LIMIT);

    let upcoming_labels: Vec<_> = lists
        .upcoming
        .iter()
        .map(|e| format::format_upcoming(e.event_date.unwrap(), now))
        .collect();
    assert_eq!(
        upcoming_labels,
        ["Tomorrow", "In 7 days", "February 20, 2025"]
    );

    let recent_labels: Vec<_> = lists
        .recent
        .iter()
        .map(|e| format::format_recent(e.event_date.unwrap(), now))
        .collect();
    assert_eq!(recent_labels, ["Yesterday", "7 days ago", "12/01/2024"]);
}

#[test]
fn full_pipeline_computes_dashboard_stats() {
    let snapshot = decode_snapshot(EVENTS_PAYLOAD);
    let now = reference_now();

    let stats = DashboardStats::compute(&snapshot.events, now);
    assert_eq!(stats.event_count, 9);
    assert_eq!(stats.upcoming_count, 4);
    assert_eq!(stats.past_count, 4);
    assert_eq!(stats.unscheduled_count, 1);
    assert_eq!(stats.format_next_event(now), "Tomorrow");
}

#[test]
fn invalid_dates_are_flagged_not_silently_dropped() {
    let snapshot = decode_snapshot(
        r#"[
            {"id": 1, "title": "Good", "eventDate": "2025-01-11T00:00:00Z"},
            {"id": 2, "title": "Bad", "eventDate": "Invalid Date"}
        ]"#,
    );

    assert_eq!(snapshot.events.len(), 1);
    assert_eq!(snapshot.warnings.len(), 1);
    assert!(snapshot.warnings[0].contains("Invalid Date"));
}

#[test]
fn join_codes_round_trip_through_urls() {
    let snapshot = decode_snapshot(EVENTS_PAYLOAD);
    let code = snapshot.events[0]
        .join_code
        .as_deref()
        .expect("first event carries a join code");

    assert!(join::is_valid_join_code(code));
    let url = join::join_url("https://triviaspark.example.com", code).unwrap();
    assert_eq!(url, "https://triviaspark.example.com/join/trivia-1a2b3c4d");

    let image = join::qr_image_url(&url, 300);
    assert!(image.contains("size=300x300"));
    assert!(image.contains("trivia-1a2b3c4d"));
}

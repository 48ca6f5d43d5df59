use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use chrono::NaiveDate;
use rendezvous::models::blockout::Blockout;
use rendezvous::models::event::Event;
use rendezvous::models::love_note::LoveNote;
use rendezvous::models::mood::MoodLog;
use rendezvous::models::notification::{Notification, NotificationKind};
use rendezvous::models::settings::PartnerNames;
use rendezvous::store::blob::{AppData, decode, decode_strict, encode};
use std::io::Write;

mod common;
use common::ts;

fn pack(json: &str) -> String {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(json.as_bytes()).expect("compress");
    STANDARD.encode(enc.finish().expect("finish"))
}

#[test]
fn test_default_state_survives_encoding() {
    let data = AppData::default();
    let encoded = encode(&data).expect("encode");

    assert_eq!(decode(&encoded), data);
}

fn populated() -> AppData {
    let mut planned = Event::new("Dinner", ts("2024-01-01", "19:00"), "Alex", "#D98880");
    planned.id = 1;
    let mut urgent = Event::new("Urgent", ts("2024-01-02", "22:00"), "Sam", "#E74C3C");
    urgent.id = 2;
    urgent.end = Some(ts("2024-01-02", "23:30"));
    urgent.border_color = Some("#C0392B".to_string());
    urgent.is_urgent = true;
    urgent.kind = Some("spontaneous".to_string());
    urgent.attended = Some(false);

    let (from, to) = (ts("2024-01-01", "09:00"), ts("2024-01-01", "17:00"));
    let mut work = Blockout::new("Work", from, to, "#95A5A6");
    work.id = 1;
    let (from, to) = (ts("2024-02-01", "00:00"), ts("2024-02-04", "00:00"));
    let mut trip = Blockout::new("Trip", from, to, "#95A5A6");
    trip.id = 2;
    trip.all_day = true;
    trip.kind = "travel".to_string();

    let mut note = LoveNote::new("Sam", "See you tonight", ts("2024-01-01", "08:15"));
    note.id = 1;

    let mut booked = Notification::unread(
        NotificationKind::Booking,
        "Alex",
        "Alex planned 'Dinner'!".to_string(),
        ts("2024-01-01", "08:00"),
    );
    booked.id = 1;
    let mut legacy = Notification::unread(
        NotificationKind::Note,
        "Sam",
        "Sam left you a love note!".to_string(),
        ts("2024-01-01", "08:15"),
    );
    legacy.id = 2;
    legacy.timestamp = None;
    legacy.read = true;

    AppData {
        events: vec![planned, urgent],
        blockouts: vec![work, trip],
        love_notes: vec![note],
        partner_names: PartnerNames::new("Alex", "Sam").expect("names"),
        notifications: vec![booked, legacy],
        mood_logs: vec![MoodLog {
            id: 1,
            partner: "Sam".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
            energy: 7,
            desire: 5,
            stress: 3,
            notes: "long week".to_string(),
        }],
    }
}

#[test]
fn test_populated_state_survives_encoding() {
    let data = populated();
    let encoded = encode(&data).expect("encode");

    assert_eq!(decode_strict(&encoded).expect("decode"), data);
}

#[test]
fn test_fractional_seconds_survive_reencoding() {
    let legacy = r##"{
        "love_notes": [
            {"id": 1, "author": "Sam", "message": "Morning!", "timestamp": "2024-01-01T21:00:00.123456"}
        ],
        "notifications": [
            {"id": 1, "sender": "Sam", "message": "Sam left you a love note!", "timestamp": "2024-01-01T21:00:00.123456", "type": "note", "read": false}
        ],
        "events": [
            {"id": 1, "title": "Walk", "start": "2024-01-02T18:30:00.5", "end": "2024-01-02T19:30:00.999", "backgroundColor": "#D98880", "booker": "Alex"}
        ]
    }"##;

    let first = decode(&pack(legacy));
    assert_eq!(first.love_notes[0].timestamp, ts("2024-01-01", "21:00"));
    assert_eq!(first.events[0].end, Some(ts("2024-01-02", "19:30")));

    let again = decode(&encode(&first).expect("encode"));
    assert_eq!(again, first);
}

#[test]
fn test_garbage_decodes_to_defaults() {
    assert_eq!(decode(""), AppData::default());
    assert_eq!(decode("not base64 !!"), AppData::default());
    // valid base64, not zlib
    assert_eq!(decode("aGVsbG8gd29ybGQ="), AppData::default());
    // valid zlib, not JSON
    assert_eq!(decode(&pack("{{{")), AppData::default());

    assert!(decode_strict("not base64 !!").is_err());
}

#[test]
fn test_missing_keys_take_defaults() {
    let data = decode(&pack(r#"{"partner_names":["Alex","Sam"]}"#));

    assert_eq!(data.partner_names, PartnerNames::new("Alex", "Sam").expect("names"));
    assert!(data.events.is_empty());
    assert!(data.mood_logs.is_empty());
}

#[test]
fn test_legacy_records_get_ids() {
    let legacy = r##"{
        "events": [
            {"title": "Picnic", "start": "2024-05-01T12:00:00", "backgroundColor": "#D98880", "booker": "Alex"},
            {"title": "Movie", "start": "2024-05-02T20:00", "backgroundColor": "#D98880", "booker": "Sam"}
        ],
        "notifications": [
            {"sender": "Alex", "message": "Alex planned 'Picnic'!", "type": "booking", "read": false},
            {"id": 7, "sender": "Sam", "message": "Sam left you a love note!", "type": "note", "read": true}
        ]
    }"##;

    let data = decode(&pack(legacy));

    let event_ids: Vec<i64> = data.events.iter().map(|e| e.id).collect();
    assert_eq!(event_ids, vec![1, 2]);
    assert_eq!(data.events[1].start.format("%H:%M").to_string(), "20:00");

    let notif_ids: Vec<i64> = data.notifications.iter().map(|n| n.id).collect();
    assert_eq!(notif_ids, vec![8, 7]);
    assert_eq!(data.notifications[0].kind, NotificationKind::Booking);
    assert!(data.notifications[0].timestamp.is_none());
}

#[test]
fn test_event_json_uses_widget_names() {
    let data = decode(&pack(
        r##"{"events":[{"id":1,"title":"Dinner","start":"2024-01-01T19:00:00","backgroundColor":"#D98880","borderColor":"#C0392B","booker":"Sam","is_urgent":true,"type":"dinner"}]}"##,
    ));
    let json = serde_json::to_value(&data.events[0]).expect("serialize");

    assert_eq!(json["backgroundColor"], "#D98880");
    assert_eq!(json["borderColor"], "#C0392B");
    assert_eq!(json["type"], "dinner");
    assert_eq!(json["start"], "2024-01-01T19:00:00");
}

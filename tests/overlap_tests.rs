use rendezvous::core::overlap::{Interval, all_conflicts, ensure_free, find_conflict};
use rendezvous::errors::AppError;
use rendezvous::models::blockout::Blockout;
use rendezvous::models::event::Event;

mod common;
use common::ts;

fn blockout(id: i64, title: &str, from: &str, to: &str) -> Blockout {
    let mut b = Blockout::new(title, ts("2024-01-01", from), ts("2024-01-01", to), "#95A5A6");
    b.id = id;
    b
}

fn slot(from: &str, to: &str) -> Interval {
    Interval::new(ts("2024-01-01", from), ts("2024-01-01", to))
}

#[test]
fn test_touching_intervals_do_not_overlap() {
    let work = [blockout(1, "Work", "09:00", "17:00")];

    assert!(find_conflict(&slot("17:00", "18:00"), &work).is_none());
    assert!(find_conflict(&slot("08:00", "09:00"), &work).is_none());
}

#[test]
fn test_partial_and_enclosing_overlaps() {
    let work = [blockout(1, "Work", "09:00", "17:00")];

    assert!(find_conflict(&slot("08:30", "09:01"), &work).is_some());
    assert!(find_conflict(&slot("16:59", "18:00"), &work).is_some());
    assert!(find_conflict(&slot("10:00", "11:00"), &work).is_some());
    assert!(find_conflict(&slot("08:00", "18:00"), &work).is_some());
}

#[test]
fn test_no_blockouts_means_free() {
    assert!(ensure_free(&slot("10:00", "11:00"), &[]).is_ok());
}

#[test]
fn test_earliest_blockout_is_reported() {
    let list = [
        blockout(3, "Gym", "12:00", "13:00"),
        blockout(2, "Call", "10:00", "12:30"),
        blockout(1, "Errand", "10:00", "11:00"),
    ];

    let hit = find_conflict(&slot("09:00", "14:00"), &list).expect("conflict");
    assert_eq!(hit.title, "Errand");

    let ids: Vec<i64> = all_conflicts(&slot("09:00", "14:00"), &list)
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    match ensure_free(&slot("09:00", "14:00"), &list) {
        Err(AppError::Conflict { title, start, end }) => {
            assert_eq!(title, "Errand");
            assert_eq!(start, "2024-01-01T10:00:00");
            assert_eq!(end, "2024-01-01T11:00:00");
        }
        other => panic!("expected a conflict, got {:?}", other),
    }
}

#[test]
fn test_event_without_end_uses_default_length() {
    let ev = Event::new("Dinner", ts("2024-01-01", "16:30"), "Alex", "#D98880");
    let work = [blockout(1, "Work", "09:00", "17:00")];

    let short = Interval::of_event(&ev, 30).expect("interval");
    assert_eq!(short.end, ts("2024-01-01", "17:00"));
    assert!(find_conflict(&short, &work).is_some());

    let late = Event::new("Dinner", ts("2024-01-01", "17:00"), "Alex", "#D98880");
    assert!(find_conflict(&Interval::of_event(&late, 60).expect("interval"), &work).is_none());
}

#[test]
fn test_out_of_range_length_is_an_error() {
    let ev = Event::new("Forever", ts("2024-01-01", "10:00"), "Alex", "#D98880");

    assert!(matches!(
        Interval::of_event(&ev, i64::MAX),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        rendezvous::utils::date::plus_minutes(chrono::NaiveDateTime::MAX, 1),
        Err(AppError::Validation(_))
    ));
}

use rendezvous::config::Config;
use rendezvous::core::blockouts::{BlockoutLogic, BlockoutSpan};
use rendezvous::core::booking::{BookingLogic, BookingRequest, EventChanges};
use rendezvous::core::dashboard::Dashboard;
use rendezvous::core::mood::{MoodEntry, MoodLogic};
use rendezvous::core::notes::NoteLogic;
use rendezvous::core::notifications::{Acknowledged, NotificationLogic};
use rendezvous::core::settings::SettingsLogic;
use rendezvous::errors::AppError;
use rendezvous::models::notification::NotificationKind;
use rendezvous::store::{BlobStore, SqliteStore, Store};

mod common;
use common::{setup_test_blob, setup_test_db, ts};

/// One store per backend, both with the couple named "Alex" and "Sam".
fn stores(name: &str) -> Vec<Box<dyn Store>> {
    let sqlite = SqliteStore::open(&setup_test_db(name)).expect("open sqlite");
    let blob = BlobStore::open(&setup_test_blob(name)).expect("open blob");

    let mut out: Vec<Box<dyn Store>> = vec![Box::new(sqlite), Box::new(blob)];
    for s in out.iter_mut() {
        SettingsLogic::save_names(s.as_mut(), "Alex", "Sam").expect("names");
    }
    out
}

fn planned(by: &str, title: &str, date: &str, time: &str) -> BookingRequest {
    BookingRequest {
        booker: by.to_string(),
        title: Some(title.to_string()),
        start: ts(date, time),
        minutes: None,
        urgent: false,
        kind: None,
    }
}

fn work_day(store: &mut dyn Store, cfg: &Config) {
    BlockoutLogic::add(
        store,
        cfg,
        "Work",
        &BlockoutSpan::Timed {
            date: ts("2024-01-01", "00:00").date(),
            from: ts("2024-01-01", "09:00").time(),
            to: ts("2024-01-01", "17:00").time(),
        },
        None,
    )
    .expect("blockout");
}

#[test]
fn test_booking_appends_event_and_notification() {
    let cfg = Config::default();
    let now = ts("2023-12-31", "12:00");

    for mut store in stores("store_book") {
        let s = store.as_mut();
        let outcome =
            BookingLogic::book(s, &cfg, &planned("Alex", "Dinner", "2024-01-01", "19:00"), now)
                .expect("book");

        let events = s.list_events().expect("events");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, outcome.event_id);
        assert_eq!(events[0].background_color, cfg.theme.planned_background);
        assert!(!events[0].is_urgent);

        let notes = s.list_notifications().expect("notifications");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, outcome.notification_id);
        assert_eq!(notes[0].kind, NotificationKind::Booking);
        assert_eq!(notes[0].message, "Alex planned 'Dinner'!");
        assert!(!notes[0].read);
    }
}

#[test]
fn test_conflicting_booking_changes_nothing() {
    let cfg = Config::default();
    let now = ts("2023-12-31", "12:00");

    for mut store in stores("store_conflict") {
        let s = store.as_mut();
        work_day(s, &cfg);

        let err = BookingLogic::book(s, &cfg, &planned("Sam", "Lunch", "2024-01-01", "10:00"), now)
            .expect_err("conflict");
        assert!(matches!(err, AppError::Conflict { ref title, .. } if title == "Work"));

        assert!(s.list_events().expect("events").is_empty());
        assert!(s.list_notifications().expect("notifications").is_empty());

        BookingLogic::book(s, &cfg, &planned("Sam", "Dinner", "2024-01-01", "18:00"), now)
            .expect("free slot");
        assert_eq!(s.list_events().expect("events").len(), 1);
    }
}

#[test]
fn test_booking_validation() {
    let cfg = Config::default();
    let now = ts("2023-12-31", "12:00");

    for mut store in stores("store_validation") {
        let s = store.as_mut();

        let stranger = planned("Jordan", "Dinner", "2024-01-01", "19:00");
        assert!(matches!(
            BookingLogic::book(s, &cfg, &stranger, now),
            Err(AppError::Validation(_))
        ));

        let untitled = planned("Alex", "   ", "2024-01-01", "19:00");
        assert!(matches!(
            BookingLogic::book(s, &cfg, &untitled, now),
            Err(AppError::Validation(_))
        ));

        let urgent = BookingRequest {
            title: None,
            urgent: true,
            ..planned("Sam", "", "2024-01-02", "07:00")
        };
        let outcome = BookingLogic::book(s, &cfg, &urgent, now).expect("urgent");
        let ev = s.get_event(outcome.event_id).expect("get").expect("stored");
        assert!(ev.is_urgent);
        assert_eq!(ev.title, cfg.theme.urgent_title);
        assert_eq!(ev.border_color.as_deref(), Some(cfg.theme.urgent_border.as_str()));
    }
}

#[test]
fn test_edit_rechecks_blockouts_and_keeps_duration() {
    let cfg = Config::default();
    let now = ts("2023-12-31", "12:00");

    for mut store in stores("store_edit") {
        let s = store.as_mut();
        work_day(s, &cfg);

        let req = BookingRequest {
            minutes: Some(90),
            ..planned("Alex", "Dinner", "2024-01-01", "18:00")
        };
        let id = BookingLogic::book(s, &cfg, &req, now).expect("book").event_id;

        let into_work = EventChanges {
            time: Some(ts("2024-01-01", "16:00").time()),
            ..Default::default()
        };
        assert!(matches!(
            BookingLogic::edit(s, &cfg, id, &into_work),
            Err(AppError::Conflict { .. })
        ));

        let later = EventChanges {
            time: Some(ts("2024-01-01", "19:00").time()),
            ..Default::default()
        };
        let ev = BookingLogic::edit(s, &cfg, id, &later).expect("edit");
        assert_eq!(ev.end, Some(ts("2024-01-01", "20:30")));

        assert!(matches!(
            BookingLogic::edit(s, &cfg, 999, &later),
            Err(AppError::NotFound { id: 999, .. })
        ));
    }
}

#[test]
fn test_toggle_attended_and_delete() {
    let cfg = Config::default();
    let now = ts("2023-12-31", "12:00");

    for mut store in stores("store_attend") {
        let s = store.as_mut();
        let id = BookingLogic::book(s, &cfg, &planned("Sam", "Hike", "2024-06-01", "08:00"), now)
            .expect("book")
            .event_id;

        assert_eq!(BookingLogic::toggle_attended(s, id).expect("attend").attended, Some(true));
        assert_eq!(BookingLogic::toggle_attended(s, id).expect("attend").attended, Some(false));

        assert!(!BookingLogic::delete(s, 12345).expect("noop delete"));
        assert_eq!(s.list_events().expect("events").len(), 1);

        assert!(BookingLogic::delete(s, id).expect("delete"));
        assert!(s.list_events().expect("events").is_empty());
    }
}

#[test]
fn test_acknowledge_is_idempotent() {
    let now = ts("2024-01-01", "12:00");

    for mut store in stores("store_ack") {
        let s = store.as_mut();
        NoteLogic::send(s, "Sam", "Good morning", now).expect("note");
        let alert = NoteLogic::emergency_alert(s, "Alex", None, now).expect("alert");

        assert_eq!(
            NotificationLogic::acknowledge(s, alert).expect("ack"),
            Acknowledged::Marked(NotificationKind::EmergencyAlert)
        );
        let after_first = s.list_notifications().expect("list");

        assert_eq!(
            NotificationLogic::acknowledge(s, alert).expect("ack"),
            Acknowledged::AlreadyRead(NotificationKind::EmergencyAlert)
        );
        assert_eq!(s.list_notifications().expect("list"), after_first);

        assert_eq!(
            NotificationLogic::acknowledge(s, 999).expect("ack"),
            Acknowledged::Unknown
        );

        // only the alert was touched
        let unread = NotificationLogic::unread(&s.list_notifications().expect("list"));
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].kind, NotificationKind::Note);
    }
}

#[test]
fn test_acknowledge_all_for_recipient() {
    let now = ts("2024-01-01", "12:00");

    for mut store in stores("store_ack_all") {
        let s = store.as_mut();
        NoteLogic::send(s, "Sam", "Hi", now).expect("note");
        NoteLogic::send(s, "Alex", "Hello", now).expect("note");

        assert_eq!(NotificationLogic::acknowledge_all(s, Some("Alex")).expect("ack"), 1);
        let unread = NotificationLogic::unread(&s.list_notifications().expect("list"));
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].sender, "Alex");

        assert_eq!(NotificationLogic::acknowledge_all(s, None).expect("ack"), 1);
        assert_eq!(NotificationLogic::acknowledge_all(s, None).expect("ack"), 0);
    }
}

#[test]
fn test_notes_newest_first() {
    for mut store in stores("store_notes") {
        let s = store.as_mut();
        NoteLogic::send(s, "Sam", "first", ts("2024-01-01", "08:00")).expect("note");
        NoteLogic::send(s, "Alex", "second", ts("2024-01-02", "08:00")).expect("note");

        let notes = NoteLogic::newest_first(s).expect("notes");
        let messages: Vec<&str> = notes.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);

        assert!(matches!(
            NoteLogic::send(s, "Sam", "   ", ts("2024-01-03", "08:00")),
            Err(AppError::Validation(_))
        ));
    }
}

#[test]
fn test_mood_log_upsert() {
    for mut store in stores("store_mood") {
        let s = store.as_mut();
        let mut entry = MoodEntry {
            partner: "Sam".to_string(),
            date: ts("2024-04-04", "00:00").date(),
            energy: 5,
            desire: 6,
            stress: 2,
            notes: String::new(),
        };

        let first = MoodLogic::log(s, &entry).expect("log");
        entry.stress = 9;
        let second = MoodLogic::log(s, &entry).expect("log again");
        assert_eq!(first, second);

        let logs = s.list_mood_logs(Some(entry.date)).expect("list");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].stress, 9);

        entry.energy = 0;
        assert!(matches!(MoodLogic::log(s, &entry), Err(AppError::Validation(_))));
    }
}

#[test]
fn test_dashboard_split() {
    let cfg = Config::default();
    let now = ts("2024-01-01", "12:00");

    for mut store in stores("store_dashboard") {
        let s = store.as_mut();
        BookingLogic::book(s, &cfg, &planned("Alex", "Past", "2023-12-01", "19:00"), now)
            .expect("book");
        BookingLogic::book(s, &cfg, &planned("Alex", "Later", "2024-03-01", "19:00"), now)
            .expect("book");
        BookingLogic::book(s, &cfg, &planned("Sam", "Sooner", "2024-02-01", "19:00"), now)
            .expect("book");
        let urgent = BookingRequest {
            title: None,
            urgent: true,
            ..planned("Sam", "", "2024-01-05", "22:00")
        };
        BookingLogic::book(s, &cfg, &urgent, now).expect("urgent");

        let events = s.list_events().expect("events");
        let board = Dashboard::build(&events, now, false);
        assert_eq!(board.urgent.len(), 1);
        let titles: Vec<&str> = board.planned.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Sooner", "Later"]);

        assert_eq!(Dashboard::build(&events, now, true).planned.len(), 3);
    }
}

#[test]
fn test_blockout_validation_and_all_day() {
    let cfg = Config::default();

    for mut store in stores("store_blockouts") {
        let s = store.as_mut();
        let day = ts("2024-07-01", "00:00").date();

        let backwards = BlockoutSpan::Timed {
            date: day,
            from: ts("2024-07-01", "17:00").time(),
            to: ts("2024-07-01", "09:00").time(),
        };
        assert!(BlockoutLogic::add(s, &cfg, "Oops", &backwards, None).is_err());

        let trip = BlockoutSpan::AllDay {
            first: day,
            last: ts("2024-07-03", "00:00").date(),
        };
        let b = BlockoutLogic::add(s, &cfg, "Trip", &trip, Some("travel")).expect("all-day");
        assert!(b.all_day);
        assert_eq!(b.end, ts("2024-07-04", "00:00"));
        assert_eq!(b.kind, "travel");

        assert!(!BlockoutLogic::delete(s, 999).expect("noop"));
        assert!(BlockoutLogic::delete(s, b.id).expect("delete"));
        assert!(s.list_blockouts().expect("list").is_empty());
    }
}

#[test]
fn test_partner_names_persist_across_reopen() {
    let db_path = setup_test_db("store_names_reopen");
    {
        let mut store = SqliteStore::open(&db_path).expect("open");
        assert_eq!(store.partner_names().expect("names").first(), "Partner 1");
        SettingsLogic::save_names(&mut store, "Robin", "Kai").expect("save");
    }
    let mut store = SqliteStore::open(&db_path).expect("reopen");
    let names = store.partner_names().expect("names");
    assert_eq!((names.first(), names.second()), ("Robin", "Kai"));

    let blob_path = setup_test_blob("store_names_reopen");
    {
        let mut store = BlobStore::open(&blob_path).expect("open");
        SettingsLogic::save_names(&mut store, "Robin", "Kai").expect("save");
    }
    let mut store = BlobStore::open(&blob_path).expect("reopen");
    assert_eq!(store.partner_names().expect("names").second(), "Kai");
}

#[test]
fn test_huge_duration_is_rejected() {
    let cfg = Config::default();
    let req = BookingRequest {
        minutes: Some(i64::MAX),
        ..planned("Alex", "Forever", "2024-01-01", "10:00")
    };
    assert!(matches!(
        BookingLogic::prepare(&cfg, &req),
        Err(AppError::Validation(_))
    ));

    for mut store in stores("store_huge_duration") {
        let s = store.as_mut();
        let now = ts("2023-12-31", "12:00");
        assert!(BookingLogic::book(s, &cfg, &req, now).is_err());
        assert!(s.list_events().expect("events").is_empty());

        let id = BookingLogic::book(s, &cfg, &planned("Alex", "Tea", "2024-01-01", "10:00"), now)
            .expect("book")
            .event_id;
        let changes = EventChanges {
            minutes: Some(i64::MAX),
            ..Default::default()
        };
        assert!(matches!(
            BookingLogic::edit(s, &cfg, id, &changes),
            Err(AppError::Validation(_))
        ));
    }
}

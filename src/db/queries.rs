use crate::errors::{AppError, AppResult};
use crate::models::blockout::Blockout;
use crate::models::event::Event;
use crate::models::love_note::LoveNote;
use crate::models::mood::MoodLog;
use crate::models::notification::{Notification, NotificationKind};
use crate::models::settings::{PARTNER_NAMES_KEY, PartnerNames};
use crate::utils::date::{DATE_FMT, format_timestamp, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn get_ts(row: &Row, col: &str) -> Result<NaiveDateTime> {
    let raw: String = row.get(col)?;
    parse_timestamp(&raw).map_err(|e| conversion_error(0, e))
}

fn get_opt_ts(row: &Row, col: &str) -> Result<Option<NaiveDateTime>> {
    match row.get::<_, Option<String>>(col)? {
        Some(raw) if !raw.is_empty() => parse_timestamp(&raw)
            .map(Some)
            .map_err(|e| conversion_error(0, e)),
        _ => Ok(None),
    }
}

// ---------------------------
// events
// ---------------------------

pub fn map_event(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        start: get_ts(row, "start")?,
        end: get_opt_ts(row, "end_at")?,
        background_color: row.get("background_color")?,
        border_color: row.get("border_color")?,
        booker: row.get("booker")?,
        is_urgent: row.get::<_, i32>("is_urgent")? == 1,
        kind: row.get("kind")?,
        attended: row.get::<_, Option<i32>>("attended")?.map(|v| v == 1),
    })
}

pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM events ORDER BY start ASC, id ASC")?;
    let rows = stmt.query_map([], map_event)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM events WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_event).optional()?)
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (title, start, end_at, background_color, border_color, booker, is_urgent, kind, attended)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ev.title,
            ev.start_str(),
            ev.end_str(),
            ev.background_color,
            ev.border_color,
            ev.booker,
            if ev.is_urgent { 1 } else { 0 },
            ev.kind,
            ev.attended.map(|a| if a { 1 } else { 0 }),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an event (all fields except id). Returns whether a row matched.
pub fn update_event(conn: &Connection, ev: &Event) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE events
         SET title = ?1, start = ?2, end_at = ?3,
             background_color = ?4, border_color = ?5,
             booker = ?6, is_urgent = ?7, kind = ?8, attended = ?9
         WHERE id = ?10",
        params![
            ev.title,
            ev.start_str(),
            ev.end_str(),
            ev.background_color,
            ev.border_color,
            ev.booker,
            if ev.is_urgent { 1 } else { 0 },
            ev.kind,
            ev.attended.map(|a| if a { 1 } else { 0 }),
            ev.id,
        ],
    )?;
    Ok(changed > 0)
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<bool> {
    Ok(conn.execute("DELETE FROM events WHERE id = ?1", [id])? > 0)
}

// ---------------------------
// blockouts
// ---------------------------

pub fn map_blockout(row: &Row) -> Result<Blockout> {
    Ok(Blockout {
        id: row.get("id")?,
        title: row.get("title")?,
        start: get_ts(row, "start")?,
        end: get_ts(row, "end_at")?,
        all_day: row.get::<_, i32>("all_day")? == 1,
        color: row.get("color")?,
        kind: row.get("kind")?,
    })
}

pub fn load_blockouts(conn: &Connection) -> AppResult<Vec<Blockout>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM blockouts ORDER BY start ASC, id ASC")?;
    let rows = stmt.query_map([], map_blockout)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_blockout(conn: &Connection, b: &Blockout) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO blockouts (title, start, end_at, all_day, color, kind)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            b.title,
            format_timestamp(&b.start),
            format_timestamp(&b.end),
            if b.all_day { 1 } else { 0 },
            b.color,
            b.kind,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_blockout(conn: &Connection, id: i64) -> AppResult<bool> {
    Ok(conn.execute("DELETE FROM blockouts WHERE id = ?1", [id])? > 0)
}

// ---------------------------
// love notes
// ---------------------------

pub fn load_love_notes(conn: &Connection) -> AppResult<Vec<LoveNote>> {
    let mut stmt =
        conn.prepare_cached("SELECT * FROM love_notes ORDER BY timestamp ASC, id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(LoveNote {
            id: row.get("id")?,
            author: row.get("author")?,
            message: row.get("message")?,
            timestamp: get_ts(row, "timestamp")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_love_note(conn: &Connection, note: &LoveNote) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO love_notes (author, message, timestamp) VALUES (?1, ?2, ?3)",
        params![note.author, note.message, format_timestamp(&note.timestamp)],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// notifications
// ---------------------------

pub fn map_notification(row: &Row) -> Result<Notification> {
    let kind_str: String = row.get("kind")?;
    let kind = kind_str
        .parse::<NotificationKind>()
        .map_err(|e| conversion_error(0, e))?;

    Ok(Notification {
        id: row.get("id")?,
        sender: row.get("sender")?,
        message: row.get("message")?,
        timestamp: get_opt_ts(row, "timestamp")?,
        kind,
        read: row.get::<_, i32>("read")? == 1,
    })
}

pub fn load_notifications(conn: &Connection) -> AppResult<Vec<Notification>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM notifications ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_notification)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_notification(conn: &Connection, n: &Notification) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO notifications (sender, message, timestamp, kind, read)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            n.sender,
            n.message,
            n.timestamp.as_ref().map(format_timestamp),
            n.kind.to_db_str(),
            if n.read { 1 } else { 0 },
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Flip one notification to read. Returns whether the id exists.
pub fn mark_notification_read(conn: &Connection, id: i64) -> AppResult<bool> {
    Ok(conn.execute("UPDATE notifications SET read = 1 WHERE id = ?1", [id])? > 0)
}

// ---------------------------
// app_state
// ---------------------------

pub fn load_partner_names(conn: &Connection) -> AppResult<PartnerNames> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            [PARTNER_NAMES_KEY],
            |row| row.get(0),
        )
        .optional()?;

    Ok(raw
        .map(|r| PartnerNames::from_json(&r))
        .unwrap_or_default())
}

pub fn save_partner_names(conn: &Connection, names: &PartnerNames) -> AppResult<()> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![PARTNER_NAMES_KEY, names.to_json()?],
    )?;
    Ok(())
}

// ---------------------------
// mood logs
// ---------------------------

pub fn map_mood(row: &Row) -> Result<MoodLog> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT)
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    Ok(MoodLog {
        id: row.get("id")?,
        partner: row.get("partner")?,
        date,
        energy: row.get("energy")?,
        desire: row.get("desire")?,
        stress: row.get("stress")?,
        notes: row.get("notes")?,
    })
}

pub fn load_mood_logs(conn: &Connection, date: Option<NaiveDate>) -> AppResult<Vec<MoodLog>> {
    let mut out = Vec::new();

    match date {
        Some(d) => {
            let mut stmt = conn.prepare_cached(
                "SELECT * FROM mood_logs WHERE date = ?1 ORDER BY partner ASC",
            )?;
            for r in stmt.query_map([d.format(DATE_FMT).to_string()], map_mood)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn
                .prepare_cached("SELECT * FROM mood_logs ORDER BY date DESC, partner ASC")?;
            for r in stmt.query_map([], map_mood)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Insert or replace the check-in for (partner, date). Returns its id.
pub fn upsert_mood_log(conn: &Connection, m: &MoodLog) -> AppResult<i64> {
    let id = conn.query_row(
        "INSERT INTO mood_logs (partner, date, energy, desire, stress, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(partner, date) DO UPDATE SET
             energy = excluded.energy,
             desire = excluded.desire,
             stress = excluded.stress,
             notes  = excluded.notes
         RETURNING id",
        params![
            m.partner,
            m.date.format(DATE_FMT).to_string(),
            m.energy,
            m.desire,
            m.stress,
            m.notes,
        ],
        |row| row.get(0),
    )?;
    Ok(id)
}

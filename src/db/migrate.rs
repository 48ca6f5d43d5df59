use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Every other migration records itself
/// there, so it must come first.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%S', 'now', 'localtime'), 'migration_applied', ?1, ?2)",
        params![version, message],
    )?;
    Ok(())
}

struct TableMigration {
    version: &'static str,
    table: &'static str,
    sql: &'static str,
}

const TABLES: &[TableMigration] = &[
    TableMigration {
        version: "20250601_0001_create_events",
        table: "events",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            title            TEXT NOT NULL,
            start            TEXT NOT NULL,
            end_at           TEXT,
            background_color TEXT NOT NULL DEFAULT '',
            border_color     TEXT,
            booker           TEXT NOT NULL DEFAULT '',
            is_urgent        INTEGER NOT NULL DEFAULT 0,
            kind             TEXT,
            attended         INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_events_start ON events(start);
        "#,
    },
    TableMigration {
        version: "20250601_0002_create_blockouts",
        table: "blockouts",
        sql: r#"
        CREATE TABLE IF NOT EXISTS blockouts (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            title    TEXT NOT NULL,
            start    TEXT NOT NULL,
            end_at   TEXT NOT NULL,
            all_day  INTEGER NOT NULL DEFAULT 0,
            color    TEXT NOT NULL DEFAULT '',
            kind     TEXT NOT NULL DEFAULT 'busy'
        );
        CREATE INDEX IF NOT EXISTS idx_blockouts_start ON blockouts(start);
        "#,
    },
    TableMigration {
        version: "20250601_0003_create_love_notes",
        table: "love_notes",
        sql: r#"
        CREATE TABLE IF NOT EXISTS love_notes (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            author    TEXT NOT NULL,
            message   TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );
        "#,
    },
    TableMigration {
        version: "20250601_0004_create_notifications",
        table: "notifications",
        sql: r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            sender    TEXT NOT NULL DEFAULT '',
            message   TEXT NOT NULL,
            timestamp TEXT,
            kind      TEXT NOT NULL CHECK(kind IN ('note','booking','emergency_alert')),
            read      INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_notifications_read ON notifications(read);
        "#,
    },
    TableMigration {
        version: "20250601_0005_create_app_state",
        table: "app_state",
        sql: r#"
        CREATE TABLE IF NOT EXISTS app_state (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    },
    TableMigration {
        version: "20250815_0006_create_mood_logs",
        table: "mood_logs",
        sql: r#"
        CREATE TABLE IF NOT EXISTS mood_logs (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            partner TEXT NOT NULL,
            date    TEXT NOT NULL,
            energy  INTEGER NOT NULL CHECK(energy BETWEEN 1 AND 10),
            desire  INTEGER NOT NULL CHECK(desire BETWEEN 1 AND 10),
            stress  INTEGER NOT NULL CHECK(stress BETWEEN 1 AND 10),
            notes   TEXT NOT NULL DEFAULT '',
            UNIQUE(partner, date)
        );
        "#,
    },
];

/// Columns added to `events` after the first relational release, which only
/// stored title/start/colours/booker/urgency.
const EVENT_COLUMNS: &[(&str, &str, &str)] = &[
    (
        "20250720_0010_events_end_at",
        "end_at",
        "ALTER TABLE events ADD COLUMN end_at TEXT;",
    ),
    (
        "20250720_0011_events_kind",
        "kind",
        "ALTER TABLE events ADD COLUMN kind TEXT;",
    ),
    (
        "20250720_0012_events_attended",
        "attended",
        "ALTER TABLE events ADD COLUMN attended INTEGER;",
    ),
];

fn create_table(conn: &Connection, m: &TableMigration) -> Result<()> {
    let existed = table_exists(conn, m.table)?;
    conn.execute_batch(m.sql)?;

    if !is_applied(conn, m.version)? {
        mark_applied(conn, m.version, &format!("Created table {}", m.table))?;
        if !existed {
            log::debug!("created table {}", m.table);
        }
    }
    Ok(())
}

fn add_event_column(conn: &Connection, version: &str, column: &str, sql: &str) -> Result<()> {
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "events", column)? {
        warning(format!("Adding '{}' column to events table...", column));
        conn.execute_batch(sql)?;
        success(format!("Migration applied: {} → added '{}'", version, column));
    }

    mark_applied(conn, version, &format!("Added {} to events", column))?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Each step is idempotent; `db --migrate` and every store open run it.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Tables (a legacy `events` table is kept, only missing columns are added)
    for m in TABLES {
        create_table(conn, m)?;
    }

    // 3) Columns missing from older `events` tables
    for (version, column, sql) in EVENT_COLUMNS {
        add_event_column(conn, version, column, sql)?;
    }

    Ok(())
}

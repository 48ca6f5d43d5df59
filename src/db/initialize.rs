use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::settings::{PARTNER_NAMES_KEY, PartnerNames};
use rusqlite::Connection;

/// Bring the schema up to date and seed the default partner names.
///
/// Safe to call on every open: migrations skip what is already applied and
/// existing names are never overwritten.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    let seeded = conn.execute(
        "INSERT OR IGNORE INTO app_state (key, value) VALUES (?1, ?2)",
        [PARTNER_NAMES_KEY, PartnerNames::default().to_json()?.as_str()],
    )?;
    if seeded > 0 {
        log::debug!("seeded default partner names");
    }
    Ok(())
}

//! Persistence seam. A deployment uses exactly one backend.

pub mod blob;
pub mod sqlite;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::blockout::Blockout;
use crate::models::event::Event;
use crate::models::love_note::LoveNote;
use crate::models::mood::MoodLog;
use crate::models::notification::Notification;
use crate::models::settings::PartnerNames;
use chrono::NaiveDate;

pub use blob::BlobStore;
pub use sqlite::SqliteStore;

/// Record storage for every entity kind.
///
/// Inserts ignore the record's `id` and return the one assigned by the
/// backend. Deletes and read-marks return whether the id existed; an unknown
/// id is never an error.
pub trait Store {
    fn backend(&self) -> Backend;

    fn list_events(&mut self) -> AppResult<Vec<Event>>;
    fn get_event(&mut self, id: i64) -> AppResult<Option<Event>>;
    fn insert_event(&mut self, event: &Event) -> AppResult<i64>;
    fn update_event(&mut self, event: &Event) -> AppResult<bool>;
    fn delete_event(&mut self, id: i64) -> AppResult<bool>;

    fn list_blockouts(&mut self) -> AppResult<Vec<Blockout>>;
    fn insert_blockout(&mut self, blockout: &Blockout) -> AppResult<i64>;
    fn delete_blockout(&mut self, id: i64) -> AppResult<bool>;

    fn list_love_notes(&mut self) -> AppResult<Vec<LoveNote>>;
    fn insert_love_note(&mut self, note: &LoveNote) -> AppResult<i64>;

    fn list_notifications(&mut self) -> AppResult<Vec<Notification>>;
    fn insert_notification(&mut self, notification: &Notification) -> AppResult<i64>;
    fn mark_notification_read(&mut self, id: i64) -> AppResult<bool>;

    /// Stored names, or the default pair when nothing was saved yet.
    fn partner_names(&mut self) -> AppResult<PartnerNames>;
    fn save_partner_names(&mut self, names: &PartnerNames) -> AppResult<()>;

    fn list_mood_logs(&mut self, date: Option<NaiveDate>) -> AppResult<Vec<MoodLog>>;
    fn upsert_mood_log(&mut self, log: &MoodLog) -> AppResult<i64>;

    /// Record a mutating operation in the internal log.
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

/// Open the store selected by `cfg`. Failure here is fatal for the command.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn Store>> {
    cfg.ensure_storage_reachable()?;
    log::debug!("opening {} store at {}", cfg.backend.as_str(), cfg.storage_path());

    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(&cfg.database)?)),
        Backend::Blob => Ok(Box::new(BlobStore::open(&cfg.blob_file)?)),
    }
}

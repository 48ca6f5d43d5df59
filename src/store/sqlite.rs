//! Relational backend: one table per entity kind over a single SQLite file.

use crate::config::Backend;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{log as db_log, queries};
use crate::errors::AppResult;
use crate::models::blockout::Blockout;
use crate::models::event::Event;
use crate::models::love_note::LoveNote;
use crate::models::mood::MoodLog;
use crate::models::notification::Notification;
use crate::models::settings::PartnerNames;
use crate::store::Store;
use chrono::NaiveDate;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl Store for SqliteStore {
    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    fn list_events(&mut self) -> AppResult<Vec<Event>> {
        queries::load_events(&self.pool.conn)
    }

    fn get_event(&mut self, id: i64) -> AppResult<Option<Event>> {
        queries::load_event(&self.pool.conn, id)
    }

    fn insert_event(&mut self, event: &Event) -> AppResult<i64> {
        queries::insert_event(&self.pool.conn, event)
    }

    fn update_event(&mut self, event: &Event) -> AppResult<bool> {
        queries::update_event(&self.pool.conn, event)
    }

    fn delete_event(&mut self, id: i64) -> AppResult<bool> {
        queries::delete_event(&self.pool.conn, id)
    }

    fn list_blockouts(&mut self) -> AppResult<Vec<Blockout>> {
        queries::load_blockouts(&self.pool.conn)
    }

    fn insert_blockout(&mut self, blockout: &Blockout) -> AppResult<i64> {
        queries::insert_blockout(&self.pool.conn, blockout)
    }

    fn delete_blockout(&mut self, id: i64) -> AppResult<bool> {
        queries::delete_blockout(&self.pool.conn, id)
    }

    fn list_love_notes(&mut self) -> AppResult<Vec<LoveNote>> {
        queries::load_love_notes(&self.pool.conn)
    }

    fn insert_love_note(&mut self, note: &LoveNote) -> AppResult<i64> {
        queries::insert_love_note(&self.pool.conn, note)
    }

    fn list_notifications(&mut self) -> AppResult<Vec<Notification>> {
        queries::load_notifications(&self.pool.conn)
    }

    fn insert_notification(&mut self, notification: &Notification) -> AppResult<i64> {
        queries::insert_notification(&self.pool.conn, notification)
    }

    fn mark_notification_read(&mut self, id: i64) -> AppResult<bool> {
        queries::mark_notification_read(&self.pool.conn, id)
    }

    fn partner_names(&mut self) -> AppResult<PartnerNames> {
        queries::load_partner_names(&self.pool.conn)
    }

    fn save_partner_names(&mut self, names: &PartnerNames) -> AppResult<()> {
        queries::save_partner_names(&self.pool.conn, names)
    }

    fn list_mood_logs(&mut self, date: Option<NaiveDate>) -> AppResult<Vec<MoodLog>> {
        queries::load_mood_logs(&self.pool.conn, date)
    }

    fn upsert_mood_log(&mut self, log: &MoodLog) -> AppResult<i64> {
        queries::upsert_mood_log(&self.pool.conn, log)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        db_log::audit(&self.pool.conn, operation, target, message)
    }
}

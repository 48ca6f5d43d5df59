use crate::core::notifications::NotificationLogic;
use crate::errors::{AppError, AppResult};
use crate::models::love_note::LoveNote;
use crate::models::notification::NotificationKind;
use crate::store::Store;
use chrono::NaiveDateTime;

pub struct NoteLogic;

impl NoteLogic {
    /// Store a love note and tell the other partner about it.
    /// Returns the note id.
    pub fn send(
        store: &mut dyn Store,
        author: &str,
        message: &str,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation(
                "A love note needs a message.".to_string(),
            ));
        }
        store.partner_names()?.require(author)?;

        let id = store.insert_love_note(&LoveNote::new(author, message, now))?;
        NotificationLogic::notify(
            store,
            NotificationKind::Note,
            author,
            format!("{} left you a love note!", author),
            now,
        )?;
        store.audit("note", &format!("note #{}", id), &format!("from {}", author))?;
        Ok(id)
    }

    /// Raise an emergency alert. Returns the notification id.
    pub fn emergency_alert(
        store: &mut dyn Store,
        sender: &str,
        message: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        store.partner_names()?.require(sender)?;

        let text = match message.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => format!("🚨 {} needs you: {}", sender, m),
            None => format!("🚨 {} needs you right now!", sender),
        };

        let id =
            NotificationLogic::notify(store, NotificationKind::EmergencyAlert, sender, text, now)?;
        store.audit("alert", &format!("notification #{}", id), &format!("from {}", sender))?;
        Ok(id)
    }

    /// Notes newest first.
    pub fn newest_first(store: &mut dyn Store) -> AppResult<Vec<LoveNote>> {
        let mut notes = store.list_love_notes()?;
        notes.reverse();
        Ok(notes)
    }
}

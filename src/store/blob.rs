//! Self-contained backend: the whole state is one JSON document,
//! zlib-compressed and base64-encoded so it can travel as a single string
//! (a link parameter, a chat message).
//!
//! The encoded string lives in a file and is rewritten after every change.

use crate::config::Backend;
use crate::errors::{AppError, AppResult};
use crate::models::blockout::Blockout;
use crate::models::event::Event;
use crate::models::love_note::LoveNote;
use crate::models::mood::MoodLog;
use crate::models::notification::Notification;
use crate::models::settings::PartnerNames;
use crate::store::Store;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Everything the app knows. Missing keys take their defaults when decoding,
/// so blobs written by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppData {
    pub events: Vec<Event>,
    pub blockouts: Vec<Blockout>,
    pub love_notes: Vec<LoveNote>,
    pub partner_names: PartnerNames,
    pub notifications: Vec<Notification>,
    pub mood_logs: Vec<MoodLog>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            blockouts: Vec::new(),
            love_notes: Vec::new(),
            partner_names: PartnerNames::default(),
            notifications: Vec::new(),
            mood_logs: Vec::new(),
        }
    }
}

/// Compress and encode the state.
pub fn encode(data: &AppData) -> AppResult<String> {
    let json = serde_json::to_vec(data)?;
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(&json)?;
    let compressed = enc.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Decode the state, reporting why it could not be read.
pub fn decode_strict(encoded: &str) -> AppResult<AppData> {
    let compressed = STANDARD
        .decode(encoded.trim().as_bytes())
        .map_err(|e| AppError::Other(format!("base64: {e}")))?;
    let mut json = Vec::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut json)?;
    let mut data: AppData = serde_json::from_slice(&json)?;
    data.assign_missing_ids();
    Ok(data)
}

/// Decode the state. Anything unreadable yields the default empty state.
pub fn decode(encoded: &str) -> AppData {
    if encoded.trim().is_empty() {
        return AppData::default();
    }
    match decode_strict(encoded) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("stored state is unreadable ({e}), starting from defaults");
            AppData::default()
        }
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

/// Give id-less records (id 0) fresh ids after the highest existing one.
fn number<T>(items: &mut [T], id: impl Fn(&mut T) -> &mut i64) {
    let mut next = next_id(items.iter_mut().map(|i| *id(i)));
    for item in items.iter_mut() {
        let slot = id(item);
        if *slot <= 0 {
            *slot = next;
            next += 1;
        }
    }
}

impl AppData {
    /// Blobs from before records carried ids only had list positions.
    fn assign_missing_ids(&mut self) {
        number(&mut self.events, |e| &mut e.id);
        number(&mut self.blockouts, |b| &mut b.id);
        number(&mut self.love_notes, |n| &mut n.id);
        number(&mut self.notifications, |n| &mut n.id);
        number(&mut self.mood_logs, |m| &mut m.id);
    }
}

pub struct BlobStore {
    path: PathBuf,
    data: AppData,
}

impl BlobStore {
    /// Load the state file. A missing or empty file is a fresh state; a
    /// corrupt one falls back to defaults.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = PathBuf::from(path);
        let raw = if path.exists() {
            fs::read_to_string(&path)?
        } else {
            String::new()
        };
        Ok(Self {
            data: decode(&raw),
            path,
        })
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Encoded form of the current state.
    pub fn export(&self) -> AppResult<String> {
        encode(&self.data)
    }

    /// Replace the whole state with a decoded blob. Unlike loading, an
    /// unreadable blob is rejected rather than replaced by defaults.
    pub fn import(&mut self, encoded: &str) -> AppResult<()> {
        self.data = decode_strict(encoded)
            .map_err(|e| AppError::Validation(format!("Cannot import state: {}", e)))?;
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encode(&self.data)?)?;
        Ok(())
    }
}

impl Store for BlobStore {
    fn backend(&self) -> Backend {
        Backend::Blob
    }

    fn list_events(&mut self) -> AppResult<Vec<Event>> {
        let mut out = self.data.events.clone();
        out.sort_by_key(|e| (e.start, e.id));
        Ok(out)
    }

    fn get_event(&mut self, id: i64) -> AppResult<Option<Event>> {
        Ok(self.data.events.iter().find(|e| e.id == id).cloned())
    }

    fn insert_event(&mut self, event: &Event) -> AppResult<i64> {
        let id = next_id(self.data.events.iter().map(|e| e.id));
        self.data.events.push(Event {
            id,
            ..event.clone()
        });
        self.persist()?;
        Ok(id)
    }

    fn update_event(&mut self, event: &Event) -> AppResult<bool> {
        match self.data.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event.clone();
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_event(&mut self, id: i64) -> AppResult<bool> {
        let before = self.data.events.len();
        self.data.events.retain(|e| e.id != id);
        if self.data.events.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn list_blockouts(&mut self) -> AppResult<Vec<Blockout>> {
        let mut out = self.data.blockouts.clone();
        out.sort_by_key(|b| (b.start, b.id));
        Ok(out)
    }

    fn insert_blockout(&mut self, blockout: &Blockout) -> AppResult<i64> {
        let id = next_id(self.data.blockouts.iter().map(|b| b.id));
        self.data.blockouts.push(Blockout {
            id,
            ..blockout.clone()
        });
        self.persist()?;
        Ok(id)
    }

    fn delete_blockout(&mut self, id: i64) -> AppResult<bool> {
        let before = self.data.blockouts.len();
        self.data.blockouts.retain(|b| b.id != id);
        if self.data.blockouts.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn list_love_notes(&mut self) -> AppResult<Vec<LoveNote>> {
        let mut out = self.data.love_notes.clone();
        out.sort_by_key(|n| (n.timestamp, n.id));
        Ok(out)
    }

    fn insert_love_note(&mut self, note: &LoveNote) -> AppResult<i64> {
        let id = next_id(self.data.love_notes.iter().map(|n| n.id));
        self.data.love_notes.push(LoveNote { id, ..note.clone() });
        self.persist()?;
        Ok(id)
    }

    fn list_notifications(&mut self) -> AppResult<Vec<Notification>> {
        let mut out = self.data.notifications.clone();
        out.sort_by_key(|n| n.id);
        Ok(out)
    }

    fn insert_notification(&mut self, notification: &Notification) -> AppResult<i64> {
        let id = next_id(self.data.notifications.iter().map(|n| n.id));
        self.data.notifications.push(Notification {
            id,
            ..notification.clone()
        });
        self.persist()?;
        Ok(id)
    }

    fn mark_notification_read(&mut self, id: i64) -> AppResult<bool> {
        let Some(n) = self.data.notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        if !n.read {
            n.read = true;
            self.persist()?;
        }
        Ok(true)
    }

    fn partner_names(&mut self) -> AppResult<PartnerNames> {
        Ok(self.data.partner_names.clone())
    }

    fn save_partner_names(&mut self, names: &PartnerNames) -> AppResult<()> {
        self.data.partner_names = names.clone();
        self.persist()
    }

    fn list_mood_logs(&mut self, date: Option<NaiveDate>) -> AppResult<Vec<MoodLog>> {
        let mut out: Vec<MoodLog> = self
            .data
            .mood_logs
            .iter()
            .filter(|m| date.is_none_or(|d| m.date == d))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.partner.cmp(&b.partner)));
        Ok(out)
    }

    fn upsert_mood_log(&mut self, log: &MoodLog) -> AppResult<i64> {
        let id = match self
            .data
            .mood_logs
            .iter_mut()
            .find(|m| m.key() == log.key())
        {
            Some(existing) => {
                *existing = MoodLog {
                    id: existing.id,
                    ..log.clone()
                };
                existing.id
            }
            None => {
                let id = next_id(self.data.mood_logs.iter().map(|m| m.id));
                self.data.mood_logs.push(MoodLog { id, ..log.clone() });
                id
            }
        };
        self.persist()?;
        Ok(id)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // no log table inside the blob
        log::info!(target: "rendezvous::audit", "{operation} ({target}): {message}");
        Ok(())
    }
}

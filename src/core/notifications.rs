//! Notification ledger: unread until acknowledged, then read for good.

use crate::errors::AppResult;
use crate::models::notification::{Notification, NotificationKind};
use crate::store::Store;
use chrono::NaiveDateTime;
use std::cmp::Reverse;

/// Result of acknowledging one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledged {
    /// Was unread, is now read.
    Marked(NotificationKind),
    /// Was already read; nothing changed.
    AlreadyRead(NotificationKind),
    /// No notification with that id.
    Unknown,
}

pub struct NotificationLogic;

impl NotificationLogic {
    /// Append one unread notification.
    pub fn notify(
        store: &mut dyn Store,
        kind: NotificationKind,
        sender: &str,
        message: String,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        store.insert_notification(&Notification::unread(kind, sender, message, now))
    }

    /// Most recent first: by timestamp, then id. Undated (legacy) entries last.
    pub fn newest_first(mut list: Vec<Notification>) -> Vec<Notification> {
        list.sort_by_key(|n| (n.timestamp.is_none(), Reverse(n.timestamp), Reverse(n.id)));
        list
    }

    /// Unread notifications, most recent first.
    pub fn unread(list: &[Notification]) -> Vec<Notification> {
        Self::newest_first(list.iter().filter(|n| !n.read).cloned().collect())
    }

    /// Drop what `recipient` sent themselves.
    pub fn for_recipient(list: Vec<Notification>, recipient: &str) -> Vec<Notification> {
        list.into_iter().filter(|n| n.sender != recipient).collect()
    }

    /// Mark exactly `id` as read. Idempotent.
    pub fn acknowledge(store: &mut dyn Store, id: i64) -> AppResult<Acknowledged> {
        let Some(current) = store.list_notifications()?.into_iter().find(|n| n.id == id) else {
            return Ok(Acknowledged::Unknown);
        };

        if current.read {
            return Ok(Acknowledged::AlreadyRead(current.kind));
        }

        store.mark_notification_read(id)?;
        store.audit("read", &format!("notification #{}", id), &current.message)?;
        Ok(Acknowledged::Marked(current.kind))
    }

    /// Mark every unread notification (optionally only those addressed to
    /// `recipient`) as read. Returns how many changed.
    pub fn acknowledge_all(store: &mut dyn Store, recipient: Option<&str>) -> AppResult<usize> {
        let mut pending = Self::unread(&store.list_notifications()?);
        if let Some(r) = recipient {
            pending = Self::for_recipient(pending, r);
        }

        for n in &pending {
            store.mark_notification_read(n.id)?;
        }
        if !pending.is_empty() {
            store.audit(
                "read",
                "notifications",
                &format!("{} notification(s) marked read", pending.len()),
            )?;
        }
        Ok(pending.len())
    }
}

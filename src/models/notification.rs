use crate::errors::AppError;
use crate::models::ts_serde;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Note,
    Booking,
    EmergencyAlert,
}

impl NotificationKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            NotificationKind::Note => "note",
            NotificationKind::Booking => "booking",
            NotificationKind::EmergencyAlert => "emergency_alert",
        }
    }

    /// Command that shows what the notification is about.
    pub fn follow_up(&self) -> &'static str {
        match self {
            NotificationKind::Note => "rendezvous notes",
            NotificationKind::Booking => "rendezvous calendar",
            NotificationKind::EmergencyAlert => "rendezvous inbox",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "note" => Ok(NotificationKind::Note),
            "booking" => Ok(NotificationKind::Booking),
            "emergency_alert" => Ok(NotificationKind::EmergencyAlert),
            other => Err(AppError::InvalidNotificationKind(other.to_string())),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// An alert surfaced to the other partner until acknowledged.
///
/// Lifecycle: created unread, then read. Reading is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub sender: String,
    pub message: String,
    #[serde(default, with = "ts_serde::option", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
}

fn default_kind() -> NotificationKind {
    NotificationKind::Booking
}

impl Notification {
    pub fn unread(
        kind: NotificationKind,
        sender: &str,
        message: String,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            sender: sender.to_string(),
            message,
            timestamp: Some(timestamp),
            kind,
            read: false,
        }
    }
}

use crate::models::ts_serde;
use crate::utils::date::format_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BLOCKOUT_KIND: &str = "busy";

/// A time span marked unavailable for new events, half-open `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blockout {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(with = "ts_serde")]
    pub start: NaiveDateTime,
    #[serde(with = "ts_serde")]
    pub end: NaiveDateTime,
    #[serde(rename = "allDay", default)]
    pub all_day: bool,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    DEFAULT_BLOCKOUT_KIND.to_string()
}

impl Blockout {
    pub fn new(title: &str, start: NaiveDateTime, end: NaiveDateTime, color: &str) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            start,
            end,
            all_day: false,
            color: color.to_string(),
            kind: default_kind(),
        }
    }

    pub fn span(&self) -> (String, String) {
        (format_timestamp(&self.start), format_timestamp(&self.end))
    }
}

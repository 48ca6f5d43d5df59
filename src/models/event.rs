use crate::errors::AppResult;
use crate::models::ts_serde;
use crate::utils::date::{format_timestamp, plus_minutes};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A planned date or an urgent booking.
///
/// Field names in the serialized form follow the calendar widget
/// (`backgroundColor`, `borderColor`) so stored blobs stay compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(with = "ts_serde")]
    pub start: NaiveDateTime,
    #[serde(default, with = "ts_serde::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(rename = "backgroundColor", default)]
    pub background_color: String,
    #[serde(rename = "borderColor", default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default)]
    pub booker: String,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attended: Option<bool>,
}

impl Event {
    /// New event not yet stored (`id = 0`, the store assigns the real one).
    pub fn new(title: &str, start: NaiveDateTime, booker: &str, background_color: &str) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            start,
            end: None,
            background_color: background_color.to_string(),
            border_color: None,
            booker: booker.to_string(),
            is_urgent: false,
            kind: None,
            attended: None,
        }
    }

    /// End of the event; falls back to `start + default_minutes`.
    pub fn effective_end(&self, default_minutes: i64) -> AppResult<NaiveDateTime> {
        match self.end {
            Some(end) => Ok(end),
            None => plus_minutes(self.start, default_minutes),
        }
    }

    pub fn start_str(&self) -> String {
        format_timestamp(&self.start)
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.as_ref().map(format_timestamp)
    }
}

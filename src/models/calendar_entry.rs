//! Entries in the shape the calendar widget consumes.

use crate::models::blockout::Blockout;
use crate::models::event::Event;
use crate::utils::date::{DATE_FMT, format_timestamp};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl From<&Event> for CalendarEntry {
    fn from(ev: &Event) -> Self {
        Self {
            title: ev.title.clone(),
            start: ev.start_str(),
            end: ev.end_str(),
            background_color: ev.background_color.clone(),
            border_color: ev.border_color.clone(),
            all_day: false,
            display: None,
        }
    }
}

impl From<&Blockout> for CalendarEntry {
    fn from(b: &Blockout) -> Self {
        // All-day spans are stored with an exclusive midnight end; the widget
        // wants dates, and its all-day `end` is exclusive as well.
        let (start, end) = if b.all_day {
            (
                b.start.date().format(DATE_FMT).to_string(),
                b.end.date().format(DATE_FMT).to_string(),
            )
        } else {
            (format_timestamp(&b.start), format_timestamp(&b.end))
        };

        Self {
            title: b.title.clone(),
            start,
            end: Some(end),
            background_color: b.color.clone(),
            border_color: None,
            all_day: b.all_day,
            display: Some("background".to_string()),
        }
    }
}

/// Calendar feed: blockouts first so they paint beneath events, each group
/// in chronological order.
pub fn build_feed(events: &[Event], blockouts: &[Blockout]) -> Vec<CalendarEntry> {
    let mut bs: Vec<&Blockout> = blockouts.iter().collect();
    bs.sort_by_key(|b| (b.start, b.id));
    let mut evs: Vec<&Event> = events.iter().collect();
    evs.sort_by_key(|e| (e.start, e.id));

    bs.into_iter()
        .map(CalendarEntry::from)
        .chain(evs.into_iter().map(CalendarEntry::from))
        .collect()
}


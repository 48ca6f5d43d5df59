use crate::models::event::Event;
use chrono::NaiveDateTime;

/// Events split the way the dashboard shows them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub urgent: Vec<Event>,
    pub planned: Vec<Event>,
}

impl Dashboard {
    /// Events starting after `now` (or all of them with `include_past`),
    /// chronological, urgent bookings separated from planned dates.
    pub fn build(events: &[Event], now: NaiveDateTime, include_past: bool) -> Self {
        let mut upcoming: Vec<Event> = events
            .iter()
            .filter(|e| include_past || e.start > now)
            .cloned()
            .collect();
        upcoming.sort_by_key(|e| (e.start, e.id));

        let (urgent, planned) = upcoming.into_iter().partition(|e| e.is_urgent);
        Self { urgent, planned }
    }
}

//! Blockout conflict detection.
//!
//! Intervals are half-open `[start, end)`: an event may start exactly when a
//! blockout ends, or end exactly when one starts.

use crate::errors::{AppError, AppResult};
use crate::models::blockout::Blockout;
use crate::models::event::Event;
use crate::utils::date::format_timestamp;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Span an event occupies; events without an end last `default_minutes`.
    pub fn of_event(ev: &Event, default_minutes: i64) -> AppResult<Self> {
        Ok(Self::new(ev.start, ev.effective_end(default_minutes)?))
    }

    pub fn of_blockout(b: &Blockout) -> Self {
        Self::new(b.start, b.end)
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Every blockout overlapping `candidate`, earliest start first (ties by id).
pub fn all_conflicts<'a>(candidate: &Interval, blockouts: &'a [Blockout]) -> Vec<&'a Blockout> {
    let mut hits: Vec<&Blockout> = blockouts
        .iter()
        .filter(|b| candidate.overlaps(&Interval::of_blockout(b)))
        .collect();
    hits.sort_by_key(|b| (b.start, b.id));
    hits
}

/// The blockout reported for a conflicting candidate: earliest start, then
/// lowest id. `None` means the slot is free.
pub fn find_conflict<'a>(candidate: &Interval, blockouts: &'a [Blockout]) -> Option<&'a Blockout> {
    blockouts
        .iter()
        .filter(|b| candidate.overlaps(&Interval::of_blockout(b)))
        .min_by_key(|b| (b.start, b.id))
}

/// Fail with `AppError::Conflict` when `candidate` hits a blockout.
pub fn ensure_free(candidate: &Interval, blockouts: &[Blockout]) -> AppResult<()> {
    match find_conflict(candidate, blockouts) {
        Some(b) => Err(AppError::Conflict {
            title: b.title.clone(),
            start: format_timestamp(&b.start),
            end: format_timestamp(&b.end),
        }),
        None => Ok(()),
    }
}

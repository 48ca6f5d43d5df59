use crate::config::Config;
use crate::core::notifications::NotificationLogic;
use crate::core::overlap::{Interval, ensure_free};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::notification::NotificationKind;
use crate::store::Store;
use crate::utils::date::{MAX_EVENT_MINUTES, format_timestamp, plus_minutes};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Input of the "plan a date" and "urgent booking" forms.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub booker: String,
    /// Required for planned dates; urgent bookings use the theme title.
    pub title: Option<String>,
    pub start: NaiveDateTime,
    pub minutes: Option<i64>,
    pub urgent: bool,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub event_id: i64,
    pub notification_id: i64,
}

/// Fields the edit form may change. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub minutes: Option<i64>,
    pub kind: Option<String>,
}

pub struct BookingLogic;

fn require_minutes(minutes: Option<i64>) -> AppResult<()> {
    match minutes {
        Some(m) if !(1..=MAX_EVENT_MINUTES).contains(&m) => Err(AppError::Validation(format!(
            "Duration must be between 1 and {} minutes.",
            MAX_EVENT_MINUTES
        ))),
        _ => Ok(()),
    }
}

impl BookingLogic {
    /// Build the event a request describes, without storing it.
    pub fn prepare(cfg: &Config, req: &BookingRequest) -> AppResult<Event> {
        require_minutes(req.minutes)?;
        let theme = &cfg.theme;

        let mut ev = if req.urgent {
            let title = req
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(theme.urgent_title.as_str());
            let mut ev = Event::new(title, req.start, &req.booker, &theme.urgent_background);
            ev.border_color = Some(theme.urgent_border.clone());
            ev.is_urgent = true;
            ev
        } else {
            let title = req.title.as_deref().map(str::trim).unwrap_or_default();
            if title.is_empty() {
                return Err(AppError::Validation(
                    "Please give the date a title.".to_string(),
                ));
            }
            Event::new(title, req.start, &req.booker, &theme.planned_background)
        };

        ev.end = req.minutes.map(|m| plus_minutes(req.start, m)).transpose()?;
        ev.kind = req.kind.clone().filter(|k| !k.trim().is_empty());
        Ok(ev)
    }

    /// Validate, check blockouts, then append the event and one unread
    /// booking notification.
    pub fn book(
        store: &mut dyn Store,
        cfg: &Config,
        req: &BookingRequest,
        now: NaiveDateTime,
    ) -> AppResult<BookingOutcome> {
        store.partner_names()?.require(&req.booker)?;
        let ev = Self::prepare(cfg, req)?;

        let blockouts = store.list_blockouts()?;
        ensure_free(&Interval::of_event(&ev, cfg.default_event_minutes)?, &blockouts)?;

        let event_id = store.insert_event(&ev)?;
        let message = if ev.is_urgent {
            format!("{} booked an {}!", ev.booker, cfg.theme.urgent_title)
        } else {
            format!("{} planned '{}'!", ev.booker, ev.title)
        };
        let notification_id =
            NotificationLogic::notify(store, NotificationKind::Booking, &ev.booker, message, now)?;

        store.audit(
            "book",
            &format!("event #{}", event_id),
            &format!("{} at {}", ev.title, format_timestamp(&ev.start)),
        )?;
        log::debug!("booked event {event_id} with notification {notification_id}");

        Ok(BookingOutcome {
            event_id,
            notification_id,
        })
    }

    /// Apply `changes` to event `id`, re-checking blockouts for the new span.
    pub fn edit(
        store: &mut dyn Store,
        cfg: &Config,
        id: i64,
        changes: &EventChanges,
    ) -> AppResult<Event> {
        require_minutes(changes.minutes)?;
        let current = store
            .get_event(id)?
            .ok_or(AppError::NotFound { kind: "event", id })?;

        let mut ev = current.clone();
        if let Some(title) = &changes.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(AppError::Validation("Title cannot be empty.".to_string()));
            }
            ev.title = title.to_string();
        }
        if let Some(kind) = &changes.kind {
            ev.kind = Some(kind.clone()).filter(|k| !k.trim().is_empty());
        }

        let date = changes.date.unwrap_or(current.start.date());
        let time = changes.time.unwrap_or(current.start.time());
        ev.start = date.and_time(time);

        // keep an explicit duration when only the start moves
        ev.end = match (changes.minutes, current.end) {
            (Some(m), _) => Some(plus_minutes(ev.start, m)?),
            (None, Some(end)) => {
                let end = ev.start.checked_add_signed(end - current.start);
                Some(end.ok_or_else(|| {
                    AppError::Validation("The new end is out of range.".to_string())
                })?)
            }
            (None, None) => None,
        };

        let blockouts = store.list_blockouts()?;
        ensure_free(&Interval::of_event(&ev, cfg.default_event_minutes)?, &blockouts)?;

        if !store.update_event(&ev)? {
            return Err(AppError::NotFound { kind: "event", id });
        }
        store.audit(
            "edit",
            &format!("event #{}", id),
            &format!("{} at {}", ev.title, format_timestamp(&ev.start)),
        )?;
        Ok(ev)
    }

    /// Flip the attended flag: unknown or missed becomes attended,
    /// attended becomes missed.
    pub fn toggle_attended(store: &mut dyn Store, id: i64) -> AppResult<Event> {
        let mut ev = store
            .get_event(id)?
            .ok_or(AppError::NotFound { kind: "event", id })?;

        ev.attended = Some(!ev.attended.unwrap_or(false));
        store.update_event(&ev)?;
        store.audit(
            "attend",
            &format!("event #{}", id),
            if ev.attended == Some(true) {
                "marked attended"
            } else {
                "marked missed"
            },
        )?;
        Ok(ev)
    }

    /// Remove an event. Unknown ids are a no-op and return `false`.
    pub fn delete(store: &mut dyn Store, id: i64) -> AppResult<bool> {
        let removed = store.delete_event(id)?;
        if removed {
            store.audit("del", &format!("event #{}", id), "Event deleted")?;
        }
        Ok(removed)
    }
}

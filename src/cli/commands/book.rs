use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::{BookingLogic, BookingRequest};
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::date;

/// Book a planned date or an urgent rendezvous.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        by,
        date: date_arg,
        time,
        title,
        urgent,
        minutes,
        kind,
    } = cmd
    {
        //
        // 1. Parse date (default today) and time
        //
        let day = match date_arg {
            Some(d) => date::require_date(d)?,
            None => date::today(),
        };
        let start = day.and_time(date::require_time(time)?);

        //
        // 2. Execute logic
        //
        let req = BookingRequest {
            booker: by.trim().to_string(),
            title: title.clone(),
            start,
            minutes: *minutes,
            urgent: *urgent,
            kind: kind.clone(),
        };

        let mut store = open_store(cfg)?;
        let outcome = BookingLogic::book(store.as_mut(), cfg, &req, date::now())?;

        let booked = store.get_event(outcome.event_id)?;
        let label = booked
            .as_ref()
            .map(|e| e.title.clone())
            .unwrap_or_default();

        success(format!(
            "Booked '{}' on {} (event #{}). Your partner will see the alert.",
            label,
            date::pretty(&start),
            outcome.event_id
        ));
    }

    Ok(())
}

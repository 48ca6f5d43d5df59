use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::{BookingLogic, EventChanges};
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::date;

/// Handle `edit` and `attend`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Edit {
            id,
            title,
            date: date_arg,
            time,
            minutes,
            kind,
        } => {
            let changes = EventChanges {
                title: title.clone(),
                date: date_arg.as_deref().map(date::require_date).transpose()?,
                time: time.as_deref().map(date::require_time).transpose()?,
                minutes: *minutes,
                kind: kind.clone(),
            };

            let mut store = open_store(cfg)?;
            let ev = BookingLogic::edit(store.as_mut(), cfg, *id, &changes)?;
            success(format!(
                "Event #{} updated: '{}' on {}",
                ev.id,
                ev.title,
                date::pretty(&ev.start)
            ));
        }
        Commands::Attend { id } => {
            let mut store = open_store(cfg)?;
            let ev = BookingLogic::toggle_attended(store.as_mut(), *id)?;
            if ev.attended == Some(true) {
                success(format!("'{}' marked as attended 💞", ev.title));
            } else {
                success(format!("'{}' marked as missed", ev.title));
            }
        }
        _ => {}
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookingLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = open_store(cfg)?;

        if BookingLogic::delete(store.as_mut(), *id)? {
            success(format!("Event #{} has been deleted.", id));
        } else {
            info(format!("No event with id {}, nothing to delete.", id));
        }
    }

    Ok(())
}

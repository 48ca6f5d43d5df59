use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notes::NoteLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::{bold, quote_wrapped};

const WRAP_WIDTH: usize = 72;

/// Handle `note`, `notes` and `alert`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Note { from, message } => {
            let mut store = open_store(cfg)?;
            let id = NoteLogic::send(store.as_mut(), from.trim(), message, date::now())?;
            success(format!("Note #{} sent 💌", id));
        }

        Commands::Alert { from, message } => {
            let mut store = open_store(cfg)?;
            let id = NoteLogic::emergency_alert(
                store.as_mut(),
                from.trim(),
                message.as_deref(),
                date::now(),
            )?;
            success(format!("Emergency alert #{} sent. Your partner will see it first.", id));
        }

        Commands::Notes => {
            let mut store = open_store(cfg)?;
            let notes = NoteLogic::newest_first(store.as_mut())?;

            if notes.is_empty() {
                info("The first note is yet to be written...");
                return Ok(());
            }

            for note in notes {
                println!(
                    "\n{} | {}",
                    bold(&format!("From: {}", note.author)),
                    date::pretty_short(&note.timestamp)
                );
                println!("{}", quote_wrapped(&note.message, WRAP_WIDTH));
            }
        }

        _ => {}
    }

    Ok(())
}

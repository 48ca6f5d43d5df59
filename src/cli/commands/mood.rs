use crate::cli::parser::{Commands, MoodAction};
use crate::config::Config;
use crate::core::mood::{MoodEntry, MoodLogic};
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Mood { action } = cmd else {
        return Ok(());
    };
    let mut store = open_store(cfg)?;

    match action {
        MoodAction::Add {
            partner,
            date: date_arg,
            energy,
            desire,
            stress,
            notes,
        } => {
            let day = match date_arg {
                Some(d) => date::require_date(d)?,
                None => date::today(),
            };
            let entry = MoodEntry {
                partner: partner.trim().to_string(),
                date: day,
                energy: *energy,
                desire: *desire,
                stress: *stress,
                notes: notes.clone(),
            };
            MoodLogic::log(store.as_mut(), &entry)?;
            success(format!("Check-in saved for {} on {}", entry.partner, day));
        }

        MoodAction::List { date: date_arg } => {
            let day = date_arg.as_deref().map(date::require_date).transpose()?;
            let logs = store.list_mood_logs(day)?;

            if logs.is_empty() {
                info("No check-ins yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("DATE", 10),
                Column::new("PARTNER", 10),
                Column::new("ENERGY", 6),
                Column::new("DESIRE", 6),
                Column::new("STRESS", 6),
                Column::new("NOTES", 20),
            ]);
            for m in &logs {
                table.add_row(vec![
                    m.date.to_string(),
                    m.partner.clone(),
                    m.energy.to_string(),
                    m.desire.to_string(),
                    m.stress.to_string(),
                    colorize_optional(&m.notes),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}

use crate::errors::{AppError, AppResult};
use crate::models::mood::MoodLog;
use crate::store::Store;
use chrono::NaiveDate;

pub const SCALE: std::ops::RangeInclusive<u8> = 1..=10;

/// Input of the daily check-in form.
#[derive(Debug, Clone)]
pub struct MoodEntry {
    pub partner: String,
    pub date: NaiveDate,
    pub energy: u8,
    pub desire: u8,
    pub stress: u8,
    pub notes: String,
}

pub struct MoodLogic;

impl MoodLogic {
    /// Save the check-in, replacing an earlier one for the same partner and day.
    pub fn log(store: &mut dyn Store, entry: &MoodEntry) -> AppResult<i64> {
        store.partner_names()?.require(&entry.partner)?;

        for (label, value) in [
            ("energy", entry.energy),
            ("desire", entry.desire),
            ("stress", entry.stress),
        ] {
            if !SCALE.contains(&value) {
                return Err(AppError::Validation(format!(
                    "{} must be between {} and {}, got {}",
                    label,
                    SCALE.start(),
                    SCALE.end(),
                    value
                )));
            }
        }

        let id = store.upsert_mood_log(&MoodLog {
            id: 0,
            partner: entry.partner.clone(),
            date: entry.date,
            energy: entry.energy,
            desire: entry.desire,
            stress: entry.stress,
            notes: entry.notes.trim().to_string(),
        })?;
        store.audit(
            "mood",
            &format!("{} {}", entry.partner, entry.date),
            &format!(
                "energy={} desire={} stress={}",
                entry.energy, entry.desire, entry.stress
            ),
        )?;
        Ok(id)
    }
}

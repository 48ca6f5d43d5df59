use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily wellness check-in. One per partner per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    #[serde(default)]
    pub id: i64,
    pub partner: String,
    pub date: NaiveDate,
    pub energy: u8,
    pub desire: u8,
    pub stress: u8,
    #[serde(default)]
    pub notes: String,
}

impl MoodLog {
    /// Upsert key.
    pub fn key(&self) -> (&str, NaiveDate) {
        (&self.partner, self.date)
    }
}

use crate::models::ts_serde;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoveNote {
    #[serde(default)]
    pub id: i64,
    pub author: String,
    pub message: String,
    #[serde(with = "ts_serde")]
    pub timestamp: NaiveDateTime,
}

impl LoveNote {
    pub fn new(author: &str, message: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            id: 0,
            author: author.to_string(),
            message: message.to_string(),
            timestamp,
        }
    }
}

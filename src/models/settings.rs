use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// `app_state` key under which the partner names are stored.
pub const PARTNER_NAMES_KEY: &str = "partner_names";

/// The couple's display names. Always exactly two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerNames(pub [String; 2]);

impl Default for PartnerNames {
    fn default() -> Self {
        Self(["Partner 1".to_string(), "Partner 2".to_string()])
    }
}

impl PartnerNames {
    pub fn new(first: &str, second: &str) -> AppResult<Self> {
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(AppError::Validation(
                "Both partner names must be non-empty.".to_string(),
            ));
        }
        Ok(Self([first.to_string(), second.to_string()]))
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn second(&self) -> &str {
        &self.0[1]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Reject a name that is not one of the two partners.
    pub fn require(&self, name: &str) -> AppResult<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "'{}' is not one of the partners ({} / {}).",
                name,
                self.first(),
                self.second()
            )))
        }
    }

    /// Decode the JSON array form; anything that is not exactly two strings
    /// falls back to the defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(v) if v.len() == 2 => Self([v[0].clone(), v[1].clone()]),
            _ => {
                log::warn!("malformed partner_names value {raw:?}, using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

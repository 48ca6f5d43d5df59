use crate::errors::{AppError, AppResult};
use crate::utils::date::MAX_EVENT_MINUTES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Which persistence backend a deployment uses. The two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Blob,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Blob => "blob",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_blob_file")]
    pub blob_file: String,
    /// Length of an event that has no explicit end, used by the blockout check.
    #[serde(default = "default_event_minutes")]
    pub default_event_minutes: i64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub theme: Theme,
}

/// Wording and colours of the screens. Every cosmetic variant of the app is
/// one of these, not a separate code path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    #[serde(default = "default_app_title")]
    pub app_title: String,
    #[serde(default = "default_urgent_title")]
    pub urgent_title: String,
    #[serde(default = "default_urgent_heading")]
    pub urgent_heading: String,
    #[serde(default = "default_planned_heading")]
    pub planned_heading: String,
    #[serde(default = "default_urgent_background")]
    pub urgent_background: String,
    #[serde(default = "default_urgent_border")]
    pub urgent_border: String,
    #[serde(default = "default_planned_background")]
    pub planned_background: String,
    #[serde(default = "default_blockout_color")]
    pub blockout_color: String,
}

fn default_backend() -> Backend {
    Backend::Sqlite
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_blob_file() -> String {
    Config::blob_file_path().to_string_lossy().to_string()
}
fn default_event_minutes() -> i64 {
    60
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_app_title() -> String {
    "The Rendezvous".to_string()
}
fn default_urgent_title() -> String {
    "Urgent Rendezvous 🔥".to_string()
}
fn default_urgent_heading() -> String {
    "🔥 Urgent Bookings".to_string()
}
fn default_planned_heading() -> String {
    "📅 Planned Dates".to_string()
}
fn default_urgent_background() -> String {
    "#E74C3C".to_string()
}
fn default_urgent_border() -> String {
    "#C0392B".to_string()
}
fn default_planned_background() -> String {
    "#D98880".to_string()
}
fn default_blockout_color() -> String {
    "#95A5A6".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            app_title: default_app_title(),
            urgent_title: default_urgent_title(),
            urgent_heading: default_urgent_heading(),
            planned_heading: default_planned_heading(),
            urgent_background: default_urgent_background(),
            urgent_border: default_urgent_border(),
            planned_background: default_planned_background(),
            blockout_color: default_blockout_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database: default_database(),
            blob_file: default_blob_file(),
            default_event_minutes: default_event_minutes(),
            log_level: default_log_level(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rendezvous`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rendezvous")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rendezvous.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rendezvous.sqlite")
    }

    /// Return the full path of the encoded state file used by the blob backend
    pub fn blob_file_path() -> PathBuf {
        Self::config_dir().join("rendezvous.state")
    }

    /// Path of the file that holds the data for the configured backend.
    pub fn storage_path(&self) -> &str {
        match self.backend {
            Backend::Sqlite => &self.database,
            Backend::Blob => &self.blob_file,
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the rest of the app cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_EVENT_MINUTES).contains(&self.default_event_minutes) {
            return Err(AppError::Config(format!(
                "default_event_minutes must be between 1 and {}, got {}",
                MAX_EVENT_MINUTES, self.default_event_minutes
            )));
        }
        Ok(())
    }

    /// Write the configuration as YAML.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and the storage file.
    ///
    /// `cfg` already carries any command-line override of backend and path.
    pub fn init_all(cfg: &Config, is_test: bool) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;

        if !is_test {
            cfg.save_to(&Self::config_file())
                .map_err(|e| io::Error::other(e.to_string()))?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let storage = Path::new(cfg.storage_path());
        if let Some(parent) = storage.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty storage file if not exists
        if !storage.exists() {
            fs::File::create(storage)?;
        }

        println!("✅ Storage:     {:?} ({})", storage, cfg.backend.as_str());

        Ok(())
    }

    /// Check that the configured storage is reachable before any command runs.
    pub fn ensure_storage_reachable(&self) -> AppResult<()> {
        let path = Path::new(self.storage_path());
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                Err(AppError::Config(format!(
                    "storage directory {} does not exist (run `rendezvous init`)",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Collect dotted key paths present in `defaults` but absent from `actual`.
fn missing_keys(defaults: &Mapping, actual: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let Some(name) = key.as_str() else { continue };
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match (default_val, actual.get(key)) {
            (_, None) => out.push(path),
            (Value::Mapping(d), Some(Value::Mapping(a))) => missing_keys(d, a, &path, out),
            _ => {}
        }
    }
}

/// Return the keys a config file lacks compared to the current defaults.
/// A missing or empty file lacks nothing: it simply loads as defaults.
pub fn check_config_file(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let actual: Value = serde_yaml::from_str(&content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let mut out = Vec::new();
    if let (Some(d), Some(a)) = (defaults.as_mapping(), actual.as_mapping()) {
        missing_keys(d, a, "", &mut out);
    }
    Ok(out)
}

/// Rewrite the config file with every missing key filled with its default.
///
/// Returns `true` when the file was changed.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let missing = check_config_file(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    for key in &missing {
        warning(format!("Adding missing config key '{}'", key));
    }

    // serde defaults fill every absent field, so load + save is the migration
    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;

    success(format!(
        "Configuration migrated ({} key(s) added).",
        missing.len()
    ));
    Ok(true)
}

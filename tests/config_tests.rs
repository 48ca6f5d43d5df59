use rendezvous::config::{Backend, Config};
use rendezvous::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

fn write_config(name: &str, yaml: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rendezvous.conf", name));
    fs::write(&path, yaml).expect("write config");
    path
}

#[test]
fn test_missing_keys_take_defaults() {
    let path = write_config("config_partial", "backend: blob\n");
    let cfg = Config::load_from(&path).expect("load");

    assert_eq!(cfg.backend, Backend::Blob);
    assert_eq!(cfg.default_event_minutes, 60);
    assert_eq!(cfg.theme.urgent_title, "Urgent Rendezvous 🔥");
}

#[test]
fn test_non_positive_event_length_is_rejected() {
    for bad in ["-120", "0"] {
        let path = write_config(
            &format!("config_bad_minutes{}", bad),
            &format!("default_event_minutes: {}\n", bad),
        );
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}

#[test]
fn test_huge_event_length_is_rejected() {
    let path = write_config(
        "config_huge_minutes",
        "default_event_minutes: 9223372036854775807\n",
    );
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    let path = write_config("config_week_minutes", "default_event_minutes: 10080\n");
    assert_eq!(
        Config::load_from(&path).expect("load").default_event_minutes,
        10080
    );
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdv() -> Command {
    cargo_bin_cmd!("rendezvous")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    temp_file(name, "sqlite")
}

/// Same as `setup_test_db`, for the encoded state file of the blob backend
pub fn setup_test_blob(name: &str) -> String {
    temp_file(name, "state")
}

fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rendezvous.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Storage flag pair for the given backend file.
pub fn storage_args(path: &str) -> [&str; 2] {
    if path.ends_with(".state") {
        ["--blob", path]
    } else {
        ["--db", path]
    }
}

/// Initialize the storage and name the couple "Alex" and "Sam".
pub fn init_with_names(path: &str) {
    let [flag, p] = storage_args(path);

    rdv().args([flag, p, "--test", "init"]).assert().success();

    rdv()
        .args([flag, p, "names", "--set", "Alex", "Sam"])
        .assert()
        .success();
}

pub fn ts(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("date")
        .and_time(chrono::NaiveTime::parse_from_str(time, "%H:%M").expect("time"))
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with an empty private configuration directory so that
/// a real `~/.devicelog/devicelog.conf` never leaks into the results
pub fn dlog() -> Command {
    let dir = env::temp_dir().join("devicelog_test_config");
    fs::create_dir_all(&dir).ok();
    dlog_with_config(&dir.to_string_lossy())
}

/// Binary under test, reading its configuration from `config_dir`
pub fn dlog_with_config(config_dir: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("devicelog");
    cmd.env("DEVICELOG_CONFIG_DIR", config_dir);
    cmd
}

/// Create a unique event file path inside the system temp dir and remove any
/// leftover file (and its operation log) from a previous run
pub fn setup_test_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_devicelog.csv", name));
    fs::remove_file(&path).ok();
    fs::remove_file(oplog_of(&path.to_string_lossy())).ok();
    path.to_string_lossy().to_string()
}

/// Operation log written next to a custom event file
pub fn oplog_of(data_file: &str) -> String {
    let p = PathBuf::from(data_file);
    let stem = p.file_stem().unwrap().to_string_lossy().to_string();
    p.with_file_name(format!("{stem}_oplog.csv"))
        .to_string_lossy()
        .to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the event file and record a small dataset useful for many tests
pub fn init_file_with_data(data_file: &str) {
    dlog()
        .args(["--data", data_file, "--test", "init"])
        .assert()
        .success();

    for (owner, action) in [("10101", "out"), ("10101", "in"), ("김판다", "out")] {
        dlog()
            .args(["--data", data_file, "add", owner, action])
            .assert()
            .success();
    }
}

pub fn ts(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

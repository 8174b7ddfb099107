#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftplanner::models::shift_date::ShiftDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn spl() -> Command {
    cargo_bin_cmd!("shiftplanner")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftplanner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh test DB, initialized through the CLI.
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    spl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Shorthand for a canonical date literal.
pub fn d(s: &str) -> ShiftDate {
    ShiftDate::parse(s).expect("valid test date")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

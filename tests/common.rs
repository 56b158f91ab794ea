#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with its configuration directory isolated under the temp dir.
pub fn trt(name: &str) -> Command {
    let mut cfg_dir: PathBuf = env::temp_dir();
    cfg_dir.push(format!("{}_timereport_cfg", name));
    let mut cmd = cargo_bin_cmd!("timereport");
    cmd.env("XDG_CONFIG_HOME", &cfg_dir).env_remove("RUST_LOG");
    cmd
}

/// Unique record store path inside the system temp dir, removed if present.
pub fn setup_records(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timereport_records.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside the temp dir, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn add(name: &str, records: &str, date: &str, from: &str, to: &str, brk: &str) {
    trt(name)
        .args([
            "--records", records, "add", date, "--from", from, "--to", to, "--break", brk,
        ])
        .assert()
        .success();
}

/// Week of Mon 2020.03.02. .. Sun 2020.03.08. with one off day and one
/// worked weekend day.
pub fn records_with_week(name: &str) -> String {
    let records = setup_records(name);
    add(name, &records, "2020.03.02.", "08:00", "16:30", "00:30");
    add(name, &records, "2020.03.03.", "08:00", "17:00", "00:30");
    add(name, &records, "2020-03-04", "09:30", "17:10", "00:00");
    add(name, &records, "2020.03.07.", "10:00", "12:00", "00:00");
    records
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use ics2invoice::models::Entry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn i2i() -> Command {
    cargo_bin_cmd!("ics2invoice")
}

/// Calendar with the two reference shifts: 8h on 2024-03-01 and 2.5h on
/// 2024-03-05. At rate 160 they are worth 1280 and 400.
pub const SAMPLE_ICS: &str = "BEGIN:VCALENDAR\n\
VERSION:2.0\n\
PRODID:-//ics2invoice tests//EN\n\
BEGIN:VEVENT\n\
DTSTART:20240301T090000\n\
DTEND:20240301T170000\n\
SUMMARY:Shift A\n\
DESCRIPTION:Front desk\n\
END:VEVENT\n\
BEGIN:VEVENT\n\
DTSTART:20240305T100000\n\
DTEND:20240305T123000\n\
SUMMARY:Shift B\n\
END:VEVENT\n\
END:VCALENDAR\n";

/// Write an .ics fixture into the system temp dir and return its path.
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ics2invoice.ics", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write ics fixture");
    p
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path that certainly holds no config file, to pin CLI runs to the
/// built-in defaults regardless of the host user's setup.
pub fn no_config() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("ics2invoice_no_such_config.conf");
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

pub fn entry(summary: &str, date: (i32, u32, u32), start: (u32, u32), end: (u32, u32)) -> Entry {
    Entry::new(
        summary.to_string(),
        String::new(),
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    )
}

/// The two reference shifts as already-parsed entries.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        entry("Shift A", (2024, 3, 1), (9, 0), (17, 0)),
        entry("Shift B", (2024, 3, 5), (10, 0), (12, 30)),
    ]
}

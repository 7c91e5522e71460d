//! Per-entry salary computation and aggregate totals.

use crate::models::Entry;
use chrono::Timelike;

/// Hours worked for one entry, from hour/minute field subtraction:
/// `(end.hour - start.hour) + (end.minute - start.minute) / 60`.
///
/// This is not an elapsed-time computation. Seconds are ignored, the date is
/// ignored, and an event whose end clock time is before its start (e.g. one
/// crossing midnight) comes out negative. Invoice totals are defined on this
/// arithmetic, so it stays as is.
pub fn hours_worked(entry: &Entry) -> f64 {
    let hours = entry.end_time.hour() as i32 - entry.start_time.hour() as i32;
    let minutes = entry.end_time.minute() as i32 - entry.start_time.minute() as i32;
    f64::from(hours) + f64::from(minutes) / 60.0
}

/// Recompute `entry_salary` in place for the whole collection.
/// Run after every rate change, before filtering and formatting.
pub fn apply_rate(entries: &mut [Entry], salary_per_hour: f64) {
    for entry in entries {
        entry.entry_salary = hours_worked(entry) * salary_per_hour;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Totals {
    pub hours: f64,
    pub salary: f64,
}

/// Aggregate hours and salary over any view of entries (full collection,
/// filtered view, or one month group).
pub fn totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut t = Totals::default();
    for entry in entries {
        t.hours += hours_worked(entry);
        t.salary += entry.entry_salary;
    }
    t
}

/// Lenient rate parsing: any text that is not a number means rate 0, so a
/// half-typed value never aborts a run.
pub fn parse_rate(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

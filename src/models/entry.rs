use chrono::{Datelike, NaiveDate, NaiveTime};

/// One calendar event normalized into a work-session record.
///
/// `entry_salary` starts at 0.0 and is written by the salary calculator
/// whenever the hourly rate changes; nothing else mutates an Entry after
/// parsing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub summary: String,     // ⇔ SUMMARY (may be empty)
    pub description: String, // ⇔ DESCRIPTION (may be empty)
    pub date: NaiveDate,     // ⇔ DTSTART date part
    pub start_time: NaiveTime,
    pub end_time: NaiveTime, // ⇔ DTEND time part, or start_time if DTEND missing
    pub entry_salary: f64,
}

impl Entry {
    pub fn new(
        summary: String,
        description: String,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            summary,
            description,
            date,
            start_time,
            end_time,
            entry_salary: 0.0,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M:%S").to_string()
    }

    /// Month number (1-12) of the entry date, used by the month filter
    /// and the month grouping in the LaTeX output.
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

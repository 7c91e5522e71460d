//! iCalendar (RFC 5545) event extraction.
//!
//! Reads just enough of the format to pull timed VEVENTs out of a calendar
//! export: line unfolding, BEGIN/END block walking, DTSTART/DTEND, SUMMARY
//! and DESCRIPTION. Anything else (alarms, timezones definitions, custom
//! properties) is ignored.

use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use chrono::{NaiveDate, NaiveDateTime};

/// Parse `.ics` content into work-session entries, sorted by date.
///
/// Events without a DTEND get a zero-duration entry (end = start). Events
/// whose start or end is a bare date (all-day events) are skipped: only
/// date-time values can carry a work session.
pub fn parse_ics(content: &str) -> AppResult<Vec<Entry>> {
    let lines = unfold(content);

    if !lines.iter().any(|l| l.eq_ignore_ascii_case("BEGIN:VCALENDAR")) {
        return Err(AppError::Parse("missing BEGIN:VCALENDAR".to_string()));
    }

    let mut entries = Vec::new();
    let mut it = lines.iter();

    while let Some(line) = it.next() {
        if line.eq_ignore_ascii_case("BEGIN:VEVENT") {
            let block = collect_event(&mut it)?;
            if let Some(entry) = event_to_entry(&block)? {
                entries.push(entry);
            }
        } else if line.split_once(':').is_none() {
            return Err(AppError::Parse(format!("invalid content line: {line}")));
        }
    }

    // Stable sort: same-date events keep file order.
    entries.sort_by_key(|e| e.date);
    Ok(entries)
}

/// Raw properties of one VEVENT block: (name, value) with the name
/// upper-cased and parameters split off.
struct EventBlock {
    props: Vec<(String, String)>,
}

impl EventBlock {
    fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Consume lines up to the matching END:VEVENT. Nested components (VALARM)
/// are skipped wholesale so their properties cannot leak into the event.
fn collect_event<'a>(it: &mut impl Iterator<Item = &'a String>) -> AppResult<EventBlock> {
    let mut props = Vec::new();
    let mut depth = 0usize;

    for line in it {
        let Some((raw_name, value)) = line.split_once(':') else {
            return Err(AppError::Parse(format!("invalid content line: {line}")));
        };

        let name = raw_name
            .split(';')
            .next()
            .unwrap_or(raw_name)
            .to_ascii_uppercase();

        match name.as_str() {
            "BEGIN" => depth += 1,
            "END" if depth > 0 => depth -= 1,
            "END" if value.eq_ignore_ascii_case("VEVENT") => {
                return Ok(EventBlock { props });
            }
            "END" => {
                return Err(AppError::Parse(format!("unexpected END:{value}")));
            }
            _ if depth == 0 => props.push((name, value.to_string())),
            _ => {} // property of a nested component
        }
    }

    Err(AppError::Parse("unterminated VEVENT".to_string()))
}

/// Turn one VEVENT into an Entry, or None if it has no resolvable
/// date-time pair (all-day events).
fn event_to_entry(block: &EventBlock) -> AppResult<Option<Entry>> {
    let dtstart = block
        .get("DTSTART")
        .ok_or_else(|| AppError::Parse("VEVENT missing DTSTART".to_string()))?;

    let start = parse_ics_datetime(dtstart)?;
    // Missing DTEND: the event has no end time, fall back to the start.
    let end = match block.get("DTEND") {
        Some(v) => parse_ics_datetime(v)?,
        None => start,
    };

    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };

    let summary = block.get("SUMMARY").map(unescape_text).unwrap_or_default();
    let description = block
        .get("DESCRIPTION")
        .map(unescape_text)
        .unwrap_or_default();

    Ok(Some(Entry::new(
        summary,
        description,
        start.date(),
        start.time(),
        end.time(),
    )))
}

/// Parse an ICS date or date-time value.
///
/// `YYYYMMDDTHHMMSS` (optionally suffixed `Z`) yields a date-time; the
/// clock fields are taken literally, no timezone conversion. A bare
/// `YYYYMMDD` is a valid value but not a date-time, so it yields None.
/// Anything else is a parse error.
fn parse_ics_datetime(value: &str) -> AppResult<Option<NaiveDateTime>> {
    let v = value.trim().trim_end_matches(['Z', 'z']);

    if let Ok(dt) = NaiveDateTime::parse_from_str(v, "%Y%m%dT%H%M%S") {
        return Ok(Some(dt));
    }
    if NaiveDate::parse_from_str(v, "%Y%m%d").is_ok() {
        return Ok(None);
    }

    Err(AppError::Parse(format!("invalid date-time value: {value}")))
}

/// RFC 5545 TEXT unescaping: `\n`/`\N` → newline, `\,` `\;` `\\` → literal.
fn unescape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }

    out
}

/// RFC 5545 line unfolding: a line starting with space or tab continues the
/// previous one. Accepts both CRLF and LF endings; blank lines are dropped.
fn unfold(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw in content.lines() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(folded) = line.strip_prefix([' ', '\t']) {
            if let Some(last) = lines.last_mut() {
                last.push_str(folded);
                continue;
            }
        }
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

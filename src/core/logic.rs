//! High-level pipeline: parse, then price.
//!
//! One load produces the canonical entry collection for the run; every
//! output is derived from it through the filter. A failed parse leaves the
//! caller with whatever collection it already had.

use crate::core::salary;
use crate::errors::AppResult;
use crate::ics;
use crate::models::Entry;

/// Parse `.ics` content and compute each entry's salary at the given rate.
pub fn build_entries(content: &str, salary_per_hour: f64) -> AppResult<Vec<Entry>> {
    let mut entries = ics::parse_ics(content)?;
    salary::apply_rate(&mut entries, salary_per_hour);
    Ok(entries)
}

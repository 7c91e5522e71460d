use crate::core::salary::Totals;
use crate::models::Entry;
use crate::errors::{AppError, AppResult};
use csv::WriterBuilder;

/// Render the filtered entries as CSV text.
///
/// One row per entry in view order, then a trailer record with the
/// aggregate figures. The writer is flexible because the trailer has its
/// own field count; quoting of embedded commas/quotes is the csv crate's
/// problem, not ours.
pub fn render_csv(entries: &[&Entry], salary_per_hour: f64, totals: &Totals) -> AppResult<String> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(vec![]);

    wtr.write_record([
        "Date",
        "Start Time",
        "End Time",
        "Salary Per Hour",
        "Total Salary",
    ])?;

    for entry in entries {
        wtr.write_record([
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            salary_per_hour.to_string(),
            entry.entry_salary.to_string(),
        ])?;
    }

    wtr.write_record([
        "Total Hours".to_string(),
        format!("{:.2}", totals.hours),
        "Salary Per Hour".to_string(),
        salary_per_hour.to_string(),
        "Total Salary".to_string(),
        totals.salary.to_string(),
    ])?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

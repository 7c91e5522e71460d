mod common;
use common::{entry, sample_entries};
use ics2invoice::config::Config;
use ics2invoice::core::salary::{apply_rate, totals};
use ics2invoice::export::csv::render_csv;
use ics2invoice::export::latex::render_latex;
use ics2invoice::models::Entry;

fn priced_sample() -> Vec<Entry> {
    let mut entries = sample_entries();
    apply_rate(&mut entries, 160.0);
    entries
}

#[test]
fn test_csv_header_rows_and_trailer() {
    let entries = priced_sample();
    let view: Vec<&Entry> = entries.iter().collect();
    let t = totals(view.iter().copied());

    let out = render_csv(&view, 160.0, &t).expect("render csv");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Date,Start Time,End Time,Salary Per Hour,Total Salary");
    assert_eq!(lines[1], "2024-03-01,09:00:00,17:00:00,160,1280");
    assert_eq!(lines[2], "2024-03-05,10:00:00,12:30:00,160,400");
    assert_eq!(lines[3], "Total Hours,10.50,Salary Per Hour,160,Total Salary,1680");
}

#[test]
fn test_csv_empty_view_is_header_and_trailer_only() {
    let t = totals([]);
    let out = render_csv(&[], 160.0, &t).expect("render csv");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Date,"));
    assert!(lines[1].starts_with("Total Hours,0.00,"));
}

#[test]
fn test_latex_scaffold_and_defaults() {
    let entries = priced_sample();
    let view: Vec<&Entry> = entries.iter().collect();
    let t = totals(view.iter().copied());

    let out = render_latex(&view, 160.0, &t, &Config::default());

    assert!(out.starts_with("\\documentclass{article}"));
    assert!(out.ends_with("\\end{document}"));
    assert!(out.contains("\\begin{center}{\\LARGE \\textbf{Salary Invoice}}\\end{center}"));
    assert!(out.contains("{John Doe}\\\\"));
    assert!(out.contains("IBAN: XX00 0000 0000 0000 0000 0000\\\\"));
    assert!(out.contains("BIC: BANKCODE\\\\"));
    assert!(out.contains("\\caption{Invoice Details}"));
}

#[test]
fn test_latex_groups_and_totals() {
    let entries = priced_sample();
    let view: Vec<&Entry> = entries.iter().collect();
    let t = totals(view.iter().copied());

    let out = render_latex(&view, 160.0, &t, &Config::default());

    assert!(out.contains("\\multicolumn{5}{|c|}{\\textbf{March}}"));
    assert!(out.contains("Shift A & 2024-03-01 & 09:00:00 & 17:00:00 & 1280.00 \\\\"));
    assert!(out.contains("Shift B & 2024-03-05 & 10:00:00 & 12:30:00 & 400.00 \\\\"));
    assert!(out.contains("\\textbf{Total for March:}"));
    assert!(out.contains("\\textbf{10.50 hours} & \\textbf{1680.00}"));
    assert!(out.contains("\\textbf{Total Hours:} 10.50"));
    assert!(out.contains("\\textbf{Salary Per Hour:} 160.00"));
    assert!(out.contains("\\textbf{Total Salary:} 1680.00"));
}

#[test]
fn test_latex_month_groups_in_first_encountered_order() {
    // Date-sorted input spanning a year boundary: December must come first.
    let mut entries = vec![
        entry("Year end", (2024, 12, 30), (9, 0), (12, 0)),
        entry("New year", (2025, 1, 2), (9, 0), (12, 0)),
    ];
    apply_rate(&mut entries, 100.0);
    let view: Vec<&Entry> = entries.iter().collect();
    let t = totals(view.iter().copied());

    let out = render_latex(&view, 100.0, &t, &Config::default());

    let december = out.find("\\textbf{December}").expect("december group");
    let january = out.find("\\textbf{January}").expect("january group");
    assert!(december < january);

    assert!(out.contains("\\textbf{Total for December:}"));
    assert!(out.contains("\\textbf{Total for January:}"));
}

#[test]
fn test_latex_empty_view_keeps_scaffold() {
    let t = totals([]);
    let out = render_latex(&[], 160.0, &t, &Config::default());

    assert!(out.contains("\\multicolumn{5}{|c|}{No entries available} \\\\"));
    assert!(out.contains("{John Doe}\\\\"));
    assert!(!out.contains("\\textbf{Total Hours:}"));
    assert!(out.ends_with("\\end{document}"));
}

#[test]
fn test_latex_uses_configured_payee_and_banking() {
    let cfg = Config {
        payee_name: "Jane Roe".to_string(),
        bank_name: "Example Bank".to_string(),
        iban: "SE00 1234".to_string(),
        ..Config::default()
    };

    let entries = priced_sample();
    let view: Vec<&Entry> = entries.iter().collect();
    let t = totals(view.iter().copied());

    let out = render_latex(&view, 160.0, &t, &cfg);
    assert!(out.contains("{Jane Roe}\\\\"));
    assert!(out.contains("Example Bank\\\\"));
    assert!(out.contains("IBAN: SE00 1234\\\\"));
    assert!(!out.contains("John Doe"));
}

#[test]
fn test_csv_and_latex_totals_agree() {
    let mut entries = vec![
        entry("A", (2024, 1, 10), (9, 0), (17, 0)),
        entry("B", (2024, 2, 3), (8, 15), (16, 45)),
        entry("C", (2024, 2, 28), (12, 0), (12, 40)),
    ];
    apply_rate(&mut entries, 145.0);
    let view: Vec<&Entry> = entries.iter().collect();
    let t = totals(view.iter().copied());

    let expected: f64 = view.iter().map(|e| e.entry_salary).sum();
    assert!((t.salary - expected).abs() < 1e-9);

    let csv_out = render_csv(&view, 145.0, &t).expect("render csv");
    let tex_out = render_latex(&view, 145.0, &t, &Config::default());

    assert!(csv_out.contains(&format!("Total Salary,{}", t.salary)));
    assert!(tex_out.contains(&format!("\\textbf{{Total Salary:}} {:.2}", t.salary)));
}

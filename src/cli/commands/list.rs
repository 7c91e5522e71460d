use crate::cli::commands::resolve_options;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_entries;
use crate::core::logic;
use crate::core::salary::{self, Totals};
use crate::errors::AppResult;
use crate::export::{csv, latex};
use crate::models::Entry;
use crate::utils::table::Table;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        file,
        search,
        months,
        rate,
        csv: csv_preview,
        tex: tex_preview,
    } = cmd
    {
        let (opts, rate) = resolve_options(search, months, rate, cfg)?;

        let content = fs::read_to_string(file)?;
        let entries = logic::build_entries(&content, rate)?;
        let view = filter_entries(&entries, &opts);
        let totals = salary::totals(view.iter().copied());

        if *csv_preview {
            print!("{}", csv::render_csv(&view, rate, &totals)?);
        } else if *tex_preview {
            println!("{}", latex::render_latex(&view, rate, &totals, cfg));
        } else if view.is_empty() {
            println!("No entries match the current filters.");
        } else {
            print_entries(&view, &totals, rate);
        }
    }
    Ok(())
}

fn print_entries(view: &[&Entry], totals: &Totals, rate: f64) {
    let mut table = Table::new(vec!["Date", "Start", "End", "Hours", "Summary", "Salary"]);

    for entry in view {
        table.add_row(vec![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            format!("{:.2}", salary::hours_worked(entry)),
            entry.summary.clone(),
            format!("{:.2}", entry.entry_salary),
        ]);
    }

    print!("{}", table.render());
    println!();
    println!(
        "Entries: {} | Total hours: {:.2} | Rate: {:.2} | Total salary: {:.2}",
        view.len(),
        totals.hours,
        rate,
        totals.salary
    );
}

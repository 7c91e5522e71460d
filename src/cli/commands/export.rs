use crate::cli::commands::resolve_options;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_entries;
use crate::core::logic;
use crate::core::salary;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat, csv, latex};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        search,
        months,
        rate,
        force,
    } = cmd
    {
        let (opts, rate) = resolve_options(search, months, rate, cfg)?;

        let path = Path::new(out);
        export::ensure_writable(path, *force)?;

        let content = fs::read_to_string(file)?;
        let entries = logic::build_entries(&content, rate)?;
        let view = filter_entries(&entries, &opts);
        let totals = salary::totals(view.iter().copied());

        info(format!(
            "Exporting {} of {} entries to {}: {}",
            view.len(),
            entries.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let rendered = match format {
            ExportFormat::Csv => csv::render_csv(&view, rate, &totals)?,
            ExportFormat::Tex => latex::render_latex(&view, rate, &totals, cfg),
        };

        fs::write(path, rendered)?;
        export::notify_export_success(format.as_str().to_uppercase().as_str(), path);
    }
    Ok(())
}

//! LaTeX invoice rendering.
//!
//! Builds the full .tex source for the salary invoice: document scaffold,
//! payee and banking blocks, and the entries table grouped by month with
//! per-month subtotals and a grand total. Pure string building, no I/O;
//! compiling the document is left to the user's toolchain.

use crate::config::Config;
use crate::core::salary::{self, Totals};
use crate::models::Entry;
use crate::utils::date::month_name;

const DOC_HEADER: &str = "\\documentclass{article}\n\
\\usepackage[utf8]{inputenc}\n\
\\usepackage{geometry}\n\
\\geometry{a4paper, margin=1in}\n\
\\begin{document}\n";

const DOC_FOOTER: &str = "\\end{document}";

const TABLE_HEADER: &str = "\\begin{table}[h!]\n\
\\centering\n\
\\begin{tabular}{|l|l|l|l|l|}\n\
\\hline\n\
\\textbf{Summary} & \\textbf{Date} & \\textbf{Start Time} & \\textbf{End Time} & \\textbf{Salary} \\\\\n\
\\hline\n";

const TABLE_FOOTER: &str = "\\end{tabular}\n\\caption{Invoice Details}\n\\end{table}\n";

const EMPTY_TABLE: &str = "\\multicolumn{5}{|c|}{No entries available} \\\\\n\\hline\n";

/// Render the invoice document for the filtered entries.
pub fn render_latex(
    entries: &[&Entry],
    salary_per_hour: f64,
    totals: &Totals,
    cfg: &Config,
) -> String {
    let mut latex = String::new();

    latex.push_str(DOC_HEADER);
    latex.push_str("\\begin{center}{\\LARGE \\textbf{Salary Invoice}}\\end{center}\n");
    latex.push_str("\\vspace{0.5cm}\n");
    latex.push_str("\\noindent\n");
    latex.push_str(&payee_block(cfg));
    latex.push_str("\\hfill\n");
    latex.push_str(&banking_block(cfg));
    latex.push_str("\\vspace{1cm}\n");
    latex.push_str(TABLE_HEADER);

    if entries.is_empty() {
        latex.push_str(EMPTY_TABLE);
        latex.push_str(TABLE_FOOTER);
        latex.push_str(DOC_FOOTER);
        return latex;
    }

    for (month, month_entries) in group_by_month(entries) {
        latex.push_str(&format!(
            "\\multicolumn{{5}}{{|c|}}{{\\textbf{{{month}}}}} \\\\\\\\\n\\hline\n"
        ));

        for entry in &month_entries {
            latex.push_str(&format!(
                "{} & {} & {} & {} & {:.2} \\\\\n",
                entry.summary,
                entry.date_str(),
                entry.start_str(),
                entry.end_str(),
                entry.entry_salary,
            ));
        }

        let sub = salary::totals(month_entries.iter().copied());
        latex.push_str(&format!(
            "\\hline\n\\multicolumn{{3}}{{|r|}}{{\\textbf{{Total for {month}:}}}} & \
\\textbf{{{:.2} hours}} & \\textbf{{{:.2}}} \\\\\\\\\n\\hline\n",
            sub.hours, sub.salary,
        ));
    }

    latex.push_str(&format!(
        "\\hline\n\\multicolumn{{2}}{{|r|}}{{\\textbf{{Total Hours:}} {:.2}}} & \
\\multicolumn{{1}}{{r|}}{{\\textbf{{Salary Per Hour:}} {:.2}}} & \
\\multicolumn{{2}}{{r|}}{{\\textbf{{Total Salary:}} {:.2}}} \\\\\n\\hline\n",
        totals.hours, salary_per_hour, totals.salary,
    ));
    latex.push_str(TABLE_FOOTER);
    latex.push_str(DOC_FOOTER);

    latex
}

/// Group a date-sorted view by month name, groups in first-encountered
/// order. The input order makes that chronological by first occurrence.
fn group_by_month<'a>(entries: &[&'a Entry]) -> Vec<(&'static str, Vec<&'a Entry>)> {
    let mut groups: Vec<(&'static str, Vec<&'a Entry>)> = Vec::new();

    for &entry in entries {
        let month = month_name(entry.month());
        match groups.iter_mut().find(|(name, _)| *name == month) {
            Some((_, bucket)) => bucket.push(entry),
            None => groups.push((month, vec![entry])),
        }
    }

    groups
}

fn payee_block(cfg: &Config) -> String {
    format!(
        "\\begin{{minipage}}[t]{{0.45\\textwidth}}\n\
{{{}}}\\\\\n\
{}\\\\\n\
{}\\\\\n\
{}\\\\\n\
\\end{{minipage}}\n",
        cfg.payee_name, cfg.payee_street, cfg.payee_city, cfg.payee_country,
    )
}

fn banking_block(cfg: &Config) -> String {
    format!(
        "\\begin{{minipage}}[t]{{0.45\\textwidth}}\n\
{}\\\\\n\
Clearing number: {}\\\\\n\
Account number: {}\\\\\n\
IBAN: {}\\\\\n\
BIC: {}\\\\\n\
\\end{{minipage}}\n",
        cfg.bank_name, cfg.clearing_number, cfg.account_number, cfg.iban, cfg.bic,
    )
}

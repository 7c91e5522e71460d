use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ics2invoice
/// CLI application to turn .ics work sessions into a salary invoice
#[derive(Parser)]
#[command(
    name = "ics2invoice",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert calendar (.ics) work sessions into a salary invoice as CSV and LaTeX",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file with default payee and banking data
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for placeholder fields")]
        check: bool,
    },

    /// List the work sessions of an .ics file as a table or preview
    List {
        /// Path of the .ics file to read
        file: String,

        /// Case-insensitive text to search in summary or description
        #[arg(long = "search", default_value = "")]
        search: String,

        /// Months to keep: 'all', 'none', or a comma list like 1,3,12
        #[arg(long = "months", default_value = "all")]
        months: String,

        /// Hourly rate (falls back to the configured default; invalid input means 0)
        #[arg(long = "rate")]
        rate: Option<String>,

        /// Print the raw CSV preview instead of the table
        #[arg(long = "csv", conflicts_with = "tex")]
        csv: bool,

        /// Print the LaTeX preview instead of the table
        #[arg(long = "tex")]
        tex: bool,
    },

    /// Export the invoice to a CSV or LaTeX file
    Export {
        /// Path of the .ics file to read
        file: String,

        /// Output format
        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Path of the output file
        #[arg(long = "file", value_name = "OUT")]
        out: String,

        /// Case-insensitive text to search in summary or description
        #[arg(long = "search", default_value = "")]
        search: String,

        /// Months to keep: 'all', 'none', or a comma list like 1,3,12
        #[arg(long = "months", default_value = "all")]
        months: String,

        /// Hourly rate (falls back to the configured default; invalid input means 0)
        #[arg(long = "rate")]
        rate: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long = "force")]
        force: bool,
    },
}

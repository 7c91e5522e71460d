pub mod config;
pub mod export;
pub mod init;
pub mod list;

use crate::config::Config;
use crate::core::filter::{FilterOptions, MonthSelection};
use crate::core::salary;
use crate::errors::AppResult;

/// Resolve the shared list/export options into a filter configuration and
/// an effective hourly rate (CLI value first, config default otherwise).
pub(crate) fn resolve_options(
    search: &str,
    months: &str,
    rate: &Option<String>,
    cfg: &Config,
) -> AppResult<(FilterOptions, f64)> {
    let opts = FilterOptions {
        search: search.to_string(),
        months: MonthSelection::parse(months)?,
    };

    let rate = match rate {
        Some(text) => salary::parse_rate(text),
        None => cfg.salary_per_hour,
    };

    Ok((opts, rate))
}

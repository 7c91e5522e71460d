//! Entry filtering: free-text search combined with a month selection.

use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use std::collections::BTreeSet;

/// Which months of the year pass the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthSelection {
    /// Every month passes.
    All,
    /// Only the listed month numbers (1-12) pass. An empty set selects
    /// nothing: deselecting everything means zero results, not a fallback
    /// to the unfiltered list.
    Months(BTreeSet<u32>),
}

impl MonthSelection {
    /// Parse a CLI selector: `all`, `none`, or a comma list like `1,3,12`.
    pub fn parse(input: &str) -> AppResult<Self> {
        let s = input.trim();

        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if s.eq_ignore_ascii_case("none") || s.is_empty() {
            return Ok(Self::Months(BTreeSet::new()));
        }

        let mut months = BTreeSet::new();
        for part in s.split(',') {
            let m: u32 = part
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidMonths(input.to_string()))?;
            if !(1..=12).contains(&m) {
                return Err(AppError::InvalidMonths(input.to_string()));
            }
            months.insert(m);
        }
        Ok(Self::Months(months))
    }

    pub fn contains(&self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Months(set) => set.contains(&month),
        }
    }
}

impl Default for MonthSelection {
    fn default() -> Self {
        Self::All
    }
}

/// Filter configuration for one run. An explicit value, not live UI state:
/// the same options over the same entries always select the same view.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub search: String,
    pub months: MonthSelection,
}

/// Select the entries passing both predicates, preserving date-sorted order.
///
/// The text predicate is a case-insensitive substring match against summary
/// or description; the empty string matches everything. Entries are never
/// mutated, the view borrows from the collection.
pub fn filter_entries<'a>(entries: &'a [Entry], opts: &FilterOptions) -> Vec<&'a Entry> {
    let needle = opts.search.to_lowercase();

    entries
        .iter()
        .filter(|e| {
            (e.summary.to_lowercase().contains(&needle)
                || e.description.to_lowercase().contains(&needle))
                && opts.months.contains(e.month())
        })
        .collect()
}

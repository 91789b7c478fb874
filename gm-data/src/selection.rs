//! Row selection in the summary table.
//!
//! Selection is a set of summary row indices. Indices are row identities in
//! the unedited summary, so sorting, filtering and editing never move a
//! selection onto a different country.

use gm_db::models::CountrySummary;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rows: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the row if absent, remove it if present.
    pub fn toggle(&mut self, row_index: usize) {
        if !self.rows.remove(&row_index) {
            self.rows.insert(row_index);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn contains(&self, row_index: usize) -> bool {
        self.rows.contains(&row_index)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Selected rows that are also visible in the current view.
    ///
    /// A row hidden by a filter stays selected but stops driving the detail
    /// charts until it is visible again.
    pub fn effective(&self, visible: &[usize]) -> Vec<usize> {
        let visible: BTreeSet<usize> = visible.iter().copied().collect();
        self.rows
            .iter()
            .copied()
            .filter(|r| visible.contains(r))
            .collect()
    }
}

/// Countries named by `rows`, resolved against the unedited summary.
///
/// Out-of-range indices are skipped.
pub fn selected_countries(summary: &[CountrySummary], rows: &[usize]) -> Vec<String> {
    rows.iter()
        .filter_map(|&r| summary.get(r))
        .map(|s| s.country.clone())
        .collect()
}

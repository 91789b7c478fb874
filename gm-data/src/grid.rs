//! The summary table as the user sees it.
//!
//! `SummaryGrid` keeps the unedited summary rows, a patched copy carrying
//! the user's cell edits, and the current column filters and sort order.
//! Row identity is always the index into the unedited summary; the view is
//! a list of those indices.

use crate::patch::{self, CellPatch, CellValue, PatchError};
use gm_db::models::{labels, CountrySummary, Metric};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A summary table column, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Country,
    Metric(Metric),
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Country,
        Column::Metric(Metric::Population),
        Column::Metric(Metric::LifeExpectancy),
        Column::Metric(Metric::GdpPerCapita),
    ];

    pub fn index(self) -> usize {
        match self {
            Column::Country => 0,
            Column::Metric(Metric::Population) => 1,
            Column::Metric(Metric::LifeExpectancy) => 2,
            Column::Metric(Metric::GdpPerCapita) => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Country => labels::COUNTRY,
            Column::Metric(m) => m.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

/// Inclusive numeric range filter. Open on a side when the bound is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    /// Build from the two text inputs. Blank or unparsable text leaves that
    /// side open.
    pub fn from_inputs(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn matches(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Round to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryGrid {
    base: Vec<CountrySummary>,
    rows: Vec<CountrySummary>,
    country_filter: String,
    range_filters: HashMap<Metric, RangeFilter>,
    sort: Option<SortState>,
}

impl SummaryGrid {
    /// Takes the aggregated summary and rounds its float columns to two
    /// decimals. Styling, filters and sorting all see the rounded values.
    pub fn new(mut summary: Vec<CountrySummary>) -> Self {
        for row in &mut summary {
            row.life_expectancy = round2(row.life_expectancy);
            row.gdp_per_capita = round2(row.gdp_per_capita);
        }
        Self {
            rows: summary.clone(),
            base: summary,
            country_filter: String::new(),
            range_filters: HashMap::new(),
            sort: None,
        }
    }

    /// The summary as aggregated, without edits.
    pub fn base(&self) -> &[CountrySummary] {
        &self.base
    }

    /// The summary with every accepted edit applied.
    pub fn rows(&self) -> &[CountrySummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Coerce and apply a cell edit. Floats are rounded like the rest of
    /// the table.
    ///
    /// On error the grid is unchanged.
    pub fn apply_patch(&mut self, cell: &CellPatch) -> Result<CellValue, PatchError> {
        let value = match patch::coerce(cell.column_index, &cell.value)? {
            CellValue::Float(v) => CellValue::Float(round2(v)),
            other => other,
        };
        let row = self
            .rows
            .get_mut(cell.row_index)
            .ok_or(PatchError::UnknownRow(cell.row_index))?;
        patch::apply_value(row, cell.column_index, &value)?;
        log::info!(
            "[GM Debug] grid: row {} column {} set to {:?}",
            cell.row_index,
            cell.column_index,
            value
        );
        Ok(value)
    }

    /// Case-insensitive substring filter on the country column.
    pub fn set_country_filter(&mut self, text: &str) {
        self.country_filter = text.trim().to_lowercase();
    }

    pub fn range_filter(&self, metric: Metric) -> RangeFilter {
        self.range_filters.get(&metric).copied().unwrap_or_default()
    }

    pub fn set_range_filter(&mut self, metric: Metric, filter: RangeFilter) {
        if filter.is_open() {
            self.range_filters.remove(&metric);
        } else {
            self.range_filters.insert(metric, filter);
        }
    }

    pub fn clear_filters(&mut self) {
        self.country_filter.clear();
        self.range_filters.clear();
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Header click: ascending, then descending, then unsorted.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some(s) if s.column == column => match s.direction {
                SortDirection::Ascending => Some(SortState {
                    column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    fn passes_filters(&self, row: &CountrySummary) -> bool {
        if !self.country_filter.is_empty()
            && !row.country.to_lowercase().contains(&self.country_filter)
        {
            return false;
        }
        self.range_filters
            .iter()
            .all(|(metric, filter)| filter.matches(metric.summary_value(row)))
    }

    fn compare(&self, column: Column, a: usize, b: usize) -> Ordering {
        let (ra, rb) = (&self.rows[a], &self.rows[b]);
        match column {
            Column::Country => ra.country.cmp(&rb.country),
            Column::Metric(m) => m.summary_value(ra).total_cmp(&m.summary_value(rb)),
        }
    }

    /// Row indices visible under the current filters, in display order.
    pub fn view(&self) -> Vec<usize> {
        let mut visible: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.passes_filters(row))
            .map(|(i, _)| i)
            .collect();

        if let Some(sort) = self.sort {
            visible.sort_by(|&a, &b| {
                let ord = self.compare(sort.column, a, b);
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        visible
    }

    /// Cell text placed in the inline editor. Same as the display except
    /// that nothing is reformatted.
    pub fn edit_text(&self, row_index: usize, column: Column) -> String {
        match (self.rows.get(row_index), column) {
            (None, _) => String::new(),
            (Some(row), Column::Country) => row.country.clone(),
            (Some(row), Column::Metric(Metric::Population)) => row.population.to_string(),
            (Some(row), Column::Metric(m)) => m.summary_value(row).to_string(),
        }
    }

    /// Cell text as displayed: integers as-is, floats rounded to 2 decimals.
    pub fn display_value(&self, row_index: usize, column: Column) -> String {
        let Some(row) = self.rows.get(row_index) else {
            return String::new();
        };
        match column {
            Column::Country => row.country.clone(),
            Column::Metric(Metric::Population) => row.population.to_string(),
            Column::Metric(m) => round2(m.summary_value(row)).to_string(),
        }
    }
}

//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use gm_data::grid::SummaryGrid;
use gm_data::selection::Selection;
use gm_db::Database;
use dioxus::prelude::*;

/// Per-session dashboard state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Load or query failure; replaces the dashboard when set
    pub error_msg: Signal<Option<String>>,
    /// Last rejected cell edit, shown above the table
    pub edit_error: Signal<Option<String>>,
    /// Summary table with edits, filters and sort order
    pub grid: Signal<SummaryGrid>,
    /// Selected summary rows
    pub selection: Signal<Selection>,
    /// (first, last) year in the dataset, for a stable chart x-axis
    pub year_range: Signal<Option<(i32, i32)>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            edit_error: Signal::new(None),
            grid: Signal::new(SummaryGrid::new(Vec::new())),
            selection: Signal::new(Selection::new()),
            year_range: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

//! Summary grid and chart logic for the Gapminder dashboard.
//!
//! Everything the dashboard computes besides drawing lives here, so it can
//! be tested natively without a browser:
//! - `chart`: per-country series for the detail line charts
//! - `editor`: the inline cell editor and its commit/cancel rules
//! - `grid`: edits, column filters and sorting layered over the summary rows
//! - `patch`: coercion of edited cell text into typed values
//! - `selection`: selected rows and the countries they resolve to
//! - `styling`: top-5 / top-1 highlight rules per numeric column

pub mod chart;
pub mod editor;
pub mod grid;
pub mod patch;
pub mod selection;
pub mod styling;

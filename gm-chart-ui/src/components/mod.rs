//! Reusable Dioxus RSX components for the Gapminder dashboard.

mod card;
mod detail_chart;
mod error_display;
mod loading_spinner;
mod placeholder;
mod summary_table;

pub use card::Card;
pub use detail_chart::DetailChartView;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use placeholder::Placeholder;
pub use summary_table::SummaryTable;

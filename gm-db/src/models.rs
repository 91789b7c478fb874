//! Query result model structs and the domain column labels.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// Display labels for the dataset columns.
///
/// The raw CSV uses terse Gapminder names (`pop`, `lifeExp`, ...); everything
/// user-facing uses these instead.
pub mod labels {
    pub const COUNTRY: &str = "Country";
    pub const YEAR: &str = "Year";
    pub const POPULATION: &str = "Population";
    pub const LIFE_EXPECTANCY: &str = "Life Expectancy";
    pub const GDP_PER_CAPITA: &str = "GDP per capita";
}

/// One country-year row of the raw dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Observation {
    pub country: String,
    pub continent: String,
    pub year: i32,
    pub population: i64,
    pub life_expectancy: f64,
    pub gdp_per_capita: f64,
}

/// Per-country maxima across all years.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountrySummary {
    pub country: String,
    /// Largest population recorded for the country.
    pub population: i64,
    /// Highest life expectancy in years.
    pub life_expectancy: f64,
    /// Highest GDP per capita (inflation-adjusted US$).
    pub gdp_per_capita: f64,
}

/// A (country, year, value) triple for multi-line charts.
///
/// Each point names its country so the chart can draw one line per country.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryYearValue {
    pub country: String,
    pub year: i32,
    pub value: f64,
}

/// The numeric columns of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Population,
    LifeExpectancy,
    GdpPerCapita,
}

impl Metric {
    /// Summary table column order after the country column.
    pub const ALL: [Metric; 3] = [
        Metric::Population,
        Metric::LifeExpectancy,
        Metric::GdpPerCapita,
    ];

    /// User-facing column label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Population => labels::POPULATION,
            Metric::LifeExpectancy => labels::LIFE_EXPECTANCY,
            Metric::GdpPerCapita => labels::GDP_PER_CAPITA,
        }
    }

    /// Read this metric off a raw observation.
    pub fn observation_value(self, observation: &Observation) -> f64 {
        match self {
            Metric::Population => observation.population as f64,
            Metric::LifeExpectancy => observation.life_expectancy,
            Metric::GdpPerCapita => observation.gdp_per_capita,
        }
    }

    /// Read this metric off a summary row.
    pub fn summary_value(self, summary: &CountrySummary) -> f64 {
        match self {
            Metric::Population => summary.population as f64,
            Metric::LifeExpectancy => summary.life_expectancy,
            Metric::GdpPerCapita => summary.gdp_per_capita,
        }
    }
}

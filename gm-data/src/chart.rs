//! Series for the two detail line charts.
//!
//! Both charts draw from the same selection-filtered subset of the raw
//! dataset; each picks one metric and draws one line per country.

use gm_db::models::{CountryYearValue, Metric, Observation};

/// A detail chart: which metric it plots and its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailChart {
    /// DOM id of the container D3 renders into.
    pub container_id: &'static str,
    pub metric: Metric,
    pub title: &'static str,
}

pub const POPULATION_CHART: DetailChart = DetailChart {
    container_id: "country-detail-pop",
    metric: Metric::Population,
    title: "Population Over Time",
};

pub const GDP_PER_CAPITA_CHART: DetailChart = DetailChart {
    container_id: "country-detail-percap",
    metric: Metric::GdpPerCapita,
    title: "GDP per Capita Over Time",
};

/// Text shown in a detail card while nothing is selected.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select a country's row in the table";

/// What a detail card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailBody {
    /// Nothing selected: a muted message instead of a chart.
    Placeholder(&'static str),
    /// A container D3 renders into, by DOM id.
    Chart(&'static str),
}

/// Decide a detail card's body from the countries currently selected.
pub fn detail_body(chart: DetailChart, selected_countries: &[String]) -> DetailBody {
    if selected_countries.is_empty() {
        DetailBody::Placeholder(EMPTY_SELECTION_MESSAGE)
    } else {
        DetailBody::Chart(chart.container_id)
    }
}

/// Project the subset onto one metric, keeping (country, year) order.
pub fn series(subset: &[Observation], metric: Metric) -> Vec<CountryYearValue> {
    subset
        .iter()
        .map(|o| CountryYearValue {
            country: o.country.clone(),
            year: o.year,
            value: metric.observation_value(o),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(country: &str, year: i32, population: i64, gdp: f64) -> Observation {
        Observation {
            country: country.to_string(),
            continent: String::new(),
            year,
            population,
            life_expectancy: 60.0,
            gdp_per_capita: gdp,
        }
    }

    #[test]
    fn series_projects_metric() {
        let subset = vec![
            obs("Brazil", 1952, 56602560, 2108.94),
            obs("Brazil", 2007, 190010647, 9065.8),
        ];
        let pop = series(&subset, POPULATION_CHART.metric);
        assert_eq!(pop.len(), 2);
        assert_eq!(pop[1].value, 190010647.0);

        let gdp = series(&subset, GDP_PER_CAPITA_CHART.metric);
        assert_eq!(gdp[0].value, 2108.94);
        assert_eq!(gdp[0].year, 1952);
        assert_eq!(gdp[0].country, "Brazil");
    }

    #[test]
    fn empty_subset_has_empty_series() {
        assert!(series(&[], Metric::Population).is_empty());
    }

    #[test]
    fn no_selection_shows_placeholder_instead_of_chart() {
        let body = detail_body(POPULATION_CHART, &[]);
        assert_eq!(body, DetailBody::Placeholder(EMPTY_SELECTION_MESSAGE));
        assert_ne!(body, DetailBody::Chart("country-detail-pop"));
        assert_eq!(
            detail_body(GDP_PER_CAPITA_CHART, &[]),
            DetailBody::Placeholder("Please select a country's row in the table")
        );
    }

    #[test]
    fn selection_shows_chart_container() {
        let countries = vec!["Brazil".to_string()];
        assert_eq!(
            detail_body(POPULATION_CHART, &countries),
            DetailBody::Chart("country-detail-pop")
        );
        assert_eq!(
            detail_body(GDP_PER_CAPITA_CHART, &countries),
            DetailBody::Chart("country-detail-percap")
        );
    }

    #[test]
    fn charts_use_distinct_containers() {
        assert_ne!(POPULATION_CHART.container_id, GDP_PER_CAPITA_CHART.container_id);
    }
}

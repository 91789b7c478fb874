//! Typed query methods for retrieving Gapminder data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components.

use crate::models::{CountrySummary, Observation};
use crate::Database;
use rusqlite::{params_from_iter, Row};

/// `?1, ?2, ..., ?n` for a dynamic `IN (...)` list.
fn placeholders(n: usize) -> String {
    (1..=n)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn observation_from_row(row: &Row<'_>) -> rusqlite::Result<Observation> {
    Ok(Observation {
        country: row.get(0)?,
        continent: row.get(1)?,
        year: row.get(2)?,
        population: row.get(3)?,
        life_expectancy: row.get(4)?,
        gdp_per_capita: row.get(5)?,
    })
}

const OBSERVATION_COLUMNS: &str =
    "country, continent, year, population, life_expectancy, gdp_per_capita";

impl Database {
    /// Get every observation, ordered by country then year.
    ///
    /// Only the tests read the whole dataset back; the dashboard works from
    /// the summary and per-country subsets.
    #[cfg(test)]
    pub fn query_observations(&self) -> anyhow::Result<Vec<Observation>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM observations ORDER BY country, year",
            OBSERVATION_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], observation_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GM Debug] query: query_observations returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the per-country summary table.
    ///
    /// One row per distinct country holding the maximum population, life
    /// expectancy and GDP per capita across all of that country's years.
    /// Each maximum is taken independently, so the three values may come
    /// from different years. Ordered by country name.
    pub fn query_country_summaries(&self) -> anyhow::Result<Vec<CountrySummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country,
                    MAX(population),
                    MAX(life_expectancy),
                    MAX(gdp_per_capita)
             FROM observations
             GROUP BY country
             ORDER BY country",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountrySummary {
                    country: row.get(0)?,
                    population: row.get(1)?,
                    life_expectancy: row.get(2)?,
                    gdp_per_capita: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GM Debug] query: query_country_summaries returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the raw observations for a set of countries.
    ///
    /// This is the selection-filtered subset: every returned row belongs to
    /// one of `countries`, and every row of those countries is returned.
    /// An empty `countries` slice yields an empty result without touching
    /// the database. Ordered by country then year.
    pub fn query_observations_for_countries(
        &self,
        countries: &[String],
    ) -> anyhow::Result<Vec<Observation>> {
        if countries.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM observations
             WHERE country IN ({})
             ORDER BY country, year",
            OBSERVATION_COLUMNS,
            placeholders(countries.len())
        ))?;
        let rows = stmt
            .query_map(params_from_iter(countries.iter()), observation_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GM Debug] query: query_observations_for_countries({}) returned {} records",
            countries.len(),
            rows.len()
        );
        Ok(rows)
    }

    /// Get the (min, max) year across all observations.
    ///
    /// Returns `None` when the database is empty.
    pub fn query_year_range(&self) -> anyhow::Result<Option<(i32, i32)>> {
        let conn = self.conn.borrow();
        let range = conn.query_row("SELECT MIN(year), MAX(year) FROM observations", [], |row| {
            Ok((row.get::<_, Option<i32>>(0)?, row.get::<_, Option<i32>>(1)?))
        })?;
        Ok(match range {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use std::collections::BTreeSet;

    /// Helper to create a database with a few countries over three years.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
country,continent,year,lifeExp,pop,gdpPercap
Kuwait,Asia,1952,55.565,160000,108382.3529
Kuwait,Asia,1957,58.033,212846,113523.1329
Kuwait,Asia,2007,77.588,2505559,47306.98978
Norway,Europe,1952,72.67,3327728,10095.42172
Norway,Europe,2007,80.196,4627926,49357.19017
Japan,Asia,1952,63.03,86459025,3216.956347
Japan,Asia,2007,82.603,127467972,31656.06806
";
        db.load_observations(csv).unwrap();
        db
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn placeholders_are_numbered() {
        assert_eq!(placeholders(1), "?1");
        assert_eq!(placeholders(3), "?1, ?2, ?3");
    }

    #[test]
    fn query_observations_returns_ordered_rows() {
        let db = sample_db();
        let rows = db.query_observations().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].country, "Japan");
        assert_eq!(rows[0].year, 1952);
        assert_eq!(rows[6].country, "Norway");
        assert_eq!(rows[6].year, 2007);
    }

    #[test]
    fn summary_has_one_row_per_country_with_maxima() {
        let db = sample_db();
        let all = db.query_observations().unwrap();
        let summary = db.query_country_summaries().unwrap();

        let countries: BTreeSet<&str> = all.iter().map(|o| o.country.as_str()).collect();
        assert_eq!(summary.len(), countries.len());

        for row in &summary {
            let own: Vec<&Observation> = all.iter().filter(|o| o.country == row.country).collect();
            let max_pop = own.iter().map(|o| o.population).max().unwrap();
            let max_life = own.iter().map(|o| o.life_expectancy).fold(f64::MIN, f64::max);
            let max_gdp = own.iter().map(|o| o.gdp_per_capita).fold(f64::MIN, f64::max);
            assert_eq!(row.population, max_pop, "{}", row.country);
            assert_eq!(row.life_expectancy, max_life, "{}", row.country);
            assert_eq!(row.gdp_per_capita, max_gdp, "{}", row.country);
        }
    }

    #[test]
    fn summary_maxima_come_from_different_years() {
        let db = sample_db();
        let summary = db.query_country_summaries().unwrap();
        let kuwait = summary.iter().find(|s| s.country == "Kuwait").unwrap();
        // GDP peaks in 1957, population and life expectancy in 2007
        assert!((kuwait.gdp_per_capita - 113523.1329).abs() < 1e-6);
        assert_eq!(kuwait.population, 2505559);
        assert!((kuwait.life_expectancy - 77.588).abs() < 1e-9);
    }

    #[test]
    fn observations_for_countries_matches_selection_exactly() {
        let db = sample_db();
        let rows = db
            .query_observations_for_countries(&names(&["Norway", "Kuwait"]))
            .unwrap();
        let countries: BTreeSet<&str> = rows.iter().map(|o| o.country.as_str()).collect();
        assert_eq!(countries, BTreeSet::from(["Kuwait", "Norway"]));
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn observations_for_no_countries_is_empty() {
        let db = sample_db();
        let rows = db.query_observations_for_countries(&[]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn observations_for_unknown_country_is_empty() {
        let db = sample_db();
        let rows = db
            .query_observations_for_countries(&names(&["Atlantis"]))
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn year_range() {
        let db = sample_db();
        assert_eq!(db.query_year_range().unwrap(), Some((1952, 2007)));
    }

    #[test]
    fn year_range_empty_database() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_year_range().unwrap(), None);
    }
}

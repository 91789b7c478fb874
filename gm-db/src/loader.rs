//! CSV loading for populating the in-memory SQLite database.
//!
//! # CSV Format
//!
//! The Gapminder export, with headers:
//! `country,continent,year,lifeExp,pop,gdpPercap[,iso_alpha,iso_num]`
//!
//! Columns are located by header name, so column order does not matter and
//! trailing columns (ISO codes) are ignored. `continent` is optional.

use crate::Database;
use anyhow::{anyhow, bail, Context};
use rusqlite::params;

/// Raw Gapminder header names.
const RAW_COUNTRY: &str = "country";
const RAW_CONTINENT: &str = "continent";
const RAW_YEAR: &str = "year";
const RAW_LIFE_EXP: &str = "lifeExp";
const RAW_POP: &str = "pop";
const RAW_GDP_PERCAP: &str = "gdpPercap";

/// Positions of the known columns within a CSV record.
struct ColumnIndex {
    country: usize,
    continent: Option<usize>,
    year: usize,
    life_exp: usize,
    pop: usize,
    gdp_percap: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| anyhow!("missing required column '{}'", name));

        Ok(Self {
            country: require(RAW_COUNTRY)?,
            continent: find(RAW_CONTINENT),
            year: require(RAW_YEAR)?,
            life_exp: require(RAW_LIFE_EXP)?,
            pop: require(RAW_POP)?,
            gdp_percap: require(RAW_GDP_PERCAP)?,
        })
    }
}

/// Population is an integer count, but some exports write it as `1234.0`.
fn parse_population(s: &str) -> anyhow::Result<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v);
    }
    let v: f64 = s
        .parse()
        .with_context(|| format!("invalid population '{}'", s))?;
    Ok(v.round() as i64)
}

impl Database {
    /// Load Gapminder observations from a CSV string.
    ///
    /// The dataset is trusted: a row with a missing country or a
    /// non-numeric value fails the whole load. Rows for an already loaded
    /// `(country, year)` pair replace the earlier row.
    ///
    /// Returns the number of rows loaded.
    ///
    /// # Example CSV
    /// ```text
    /// country,continent,year,lifeExp,pop,gdpPercap
    /// Afghanistan,Asia,1952,28.801,8425333,779.4453145
    /// ```
    pub fn load_observations(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO observations
                 (country, continent, year, population, life_expectancy, gdp_per_capita)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;

            for (line, result) in rdr.records().enumerate() {
                let r = result?;
                let field = |idx: usize| r.get(idx).unwrap_or("").trim();
                let row = line + 2;

                let country = field(columns.country);
                if country.is_empty() {
                    bail!("row {}: empty country", row);
                }
                let continent = columns.continent.map(field).unwrap_or("");
                let year: i32 = field(columns.year)
                    .parse()
                    .with_context(|| format!("row {}: invalid year", row))?;
                let population = parse_population(field(columns.pop))
                    .with_context(|| format!("row {}", row))?;
                let life_expectancy: f64 = field(columns.life_exp)
                    .parse()
                    .with_context(|| format!("row {}: invalid lifeExp", row))?;
                let gdp_per_capita: f64 = field(columns.gdp_percap)
                    .parse()
                    .with_context(|| format!("row {}: invalid gdpPercap", row))?;

                stmt.execute(params![
                    country,
                    continent,
                    year,
                    population,
                    life_expectancy,
                    gdp_per_capita
                ])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[GM Debug] loader: Loaded {} observations", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn count_rows(db: &Database) -> i64 {
        db.conn
            .borrow()
            .query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn load_observations_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG,4
Afghanistan,Asia,2007,43.828,31889923,974.5803384,AFG,4
Norway,Europe,2007,80.196,4627926,49357.19017,NOR,578
";
        let loaded = db.load_observations(csv).unwrap();
        assert_eq!(loaded, 3);
        assert_eq!(count_rows(&db), 3);

        let conn = db.conn.borrow();
        let (pop, continent): (i64, String) = conn
            .query_row(
                "SELECT population, continent FROM observations
                 WHERE country = 'Afghanistan' AND year = 2007",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(pop, 31889923);
        assert_eq!(continent, "Asia");
    }

    #[test]
    fn load_observations_locates_columns_by_header() {
        let db = Database::new().unwrap();
        let csv = "\
gdpPercap,pop,lifeExp,year,country
974.58,31889923,43.828,2007,Afghanistan
";
        db.load_observations(csv).unwrap();

        let conn = db.conn.borrow();
        let (life, continent): (f64, String) = conn
            .query_row(
                "SELECT life_expectancy, continent FROM observations",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert!((life - 43.828).abs() < 1e-9);
        assert_eq!(continent, "", "Missing continent column defaults to empty");
    }

    #[test]
    fn load_observations_accepts_float_population() {
        let db = Database::new().unwrap();
        let csv = "\
country,year,lifeExp,pop,gdpPercap
China,1952,44,556263527.0,400.448611
";
        db.load_observations(csv).unwrap();
        let pop: i64 = db
            .conn
            .borrow()
            .query_row("SELECT population FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(pop, 556263527);
    }

    #[test]
    fn load_observations_rejects_missing_column() {
        let db = Database::new().unwrap();
        let csv = "\
country,year,pop,gdpPercap
China,1952,556263527,400.448611
";
        let err = db.load_observations(csv).unwrap_err();
        assert!(err.to_string().contains("lifeExp"));
    }

    #[test]
    fn load_observations_rejects_non_numeric_and_rolls_back() {
        let db = Database::new().unwrap();
        let csv = "\
country,year,lifeExp,pop,gdpPercap
China,1952,44,556263527,400.448611
China,2007,n/a,1318683096,4959.114854
";
        assert!(db.load_observations(csv).is_err());
        assert_eq!(count_rows(&db), 0, "Failed load should not leave partial rows");
    }

    #[test]
    fn load_observations_replaces_on_conflict() {
        let db = Database::new().unwrap();
        let csv1 = "\
country,year,lifeExp,pop,gdpPercap
Japan,2007,80.0,1,1.0
";
        let csv2 = "\
country,year,lifeExp,pop,gdpPercap
Japan,2007,82.603,127467972,31656.06806
";
        db.load_observations(csv1).unwrap();
        db.load_observations(csv2).unwrap();
        assert_eq!(count_rows(&db), 1, "Should have 1 row after upsert");

        let pop: i64 = db
            .conn
            .borrow()
            .query_row("SELECT population FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(pop, 127467972);
    }

    #[test]
    fn load_observations_empty_body() {
        let db = Database::new().unwrap();
        let loaded = db
            .load_observations("country,year,lifeExp,pop,gdpPercap\n")
            .unwrap();
        assert_eq!(loaded, 0);
    }
}

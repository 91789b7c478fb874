//! SQL schema for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// Creates one table, `observations`, keyed by `(country, year)`. The
/// per-country summary is derived on the fly with `GROUP BY country` +
/// `MAX(...)`, so it has no table of its own.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS observations (
        country TEXT NOT NULL,
        continent TEXT NOT NULL,
        year INTEGER NOT NULL,
        population INTEGER NOT NULL,
        life_expectancy REAL NOT NULL,
        gdp_per_capita REAL NOT NULL,
        PRIMARY KEY (country, year)
    );
    CREATE INDEX IF NOT EXISTS idx_obs_country ON observations(country);
    CREATE INDEX IF NOT EXISTS idx_obs_year ON observations(year);
    "#
}

//! Coercion of edited cell text into typed values.
//!
//! Column 0 (country) stays text, column 1 (population) must be an integer,
//! every other column must be a float. Surrounding whitespace is ignored.

use gm_db::models::CountrySummary;
use thiserror::Error;

/// A single cell edit as submitted by the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPatch {
    /// Summary row index (identity in the unedited table, not view position).
    pub row_index: usize,
    pub column_index: usize,
    pub value: String,
}

/// A coerced cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    #[error("column {column}: '{value}' is not an integer")]
    InvalidInteger { column: usize, value: String },

    #[error("column {column}: '{value}' is not a number")]
    InvalidFloat { column: usize, value: String },

    #[error("no column {0} in the summary table")]
    UnknownColumn(usize),

    #[error("no row {0} in the summary table")]
    UnknownRow(usize),
}

/// Coerce raw edit text for the given column.
pub fn coerce(column_index: usize, raw: &str) -> Result<CellValue, PatchError> {
    match column_index {
        0 => Ok(CellValue::Text(raw.trim().to_string())),
        1 => raw
            .trim()
            .parse::<i64>()
            .map(CellValue::Integer)
            .map_err(|_| PatchError::InvalidInteger {
                column: column_index,
                value: raw.to_string(),
            }),
        _ => raw
            .trim()
            .parse::<f64>()
            .map(CellValue::Float)
            .map_err(|_| PatchError::InvalidFloat {
                column: column_index,
                value: raw.to_string(),
            }),
    }
}

/// Write a coerced value into a summary row.
///
/// Fails with [`PatchError::UnknownColumn`] for indices past the last
/// summary column. The row is left untouched on failure.
pub fn apply_value(
    row: &mut CountrySummary,
    column_index: usize,
    value: &CellValue,
) -> Result<(), PatchError> {
    match (column_index, value) {
        (0, CellValue::Text(s)) => row.country = s.clone(),
        (1, CellValue::Integer(v)) => row.population = *v,
        (2, CellValue::Float(v)) => row.life_expectancy = *v,
        (3, CellValue::Float(v)) => row.gdp_per_capita = *v,
        _ => return Err(PatchError::UnknownColumn(column_index)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn japan() -> CountrySummary {
        CountrySummary {
            country: "Japan".to_string(),
            population: 127467972,
            life_expectancy: 82.603,
            gdp_per_capita: 31656.07,
        }
    }

    #[test]
    fn country_stays_text() {
        assert_eq!(coerce(0, "123"), Ok(CellValue::Text("123".to_string())));
    }

    #[test]
    fn population_parses_integer() {
        assert_eq!(coerce(1, "123"), Ok(CellValue::Integer(123)));
        assert_eq!(coerce(1, " 42 "), Ok(CellValue::Integer(42)));
    }

    #[test]
    fn population_rejects_non_numeric() {
        assert_eq!(
            coerce(1, "lots"),
            Err(PatchError::InvalidInteger {
                column: 1,
                value: "lots".to_string()
            })
        );
    }

    #[test]
    fn population_rejects_decimal() {
        assert!(matches!(
            coerce(1, "12.5"),
            Err(PatchError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn other_columns_parse_float() {
        assert_eq!(coerce(2, "81.5"), Ok(CellValue::Float(81.5)));
        assert_eq!(coerce(3, "1e3"), Ok(CellValue::Float(1000.0)));
        assert!(matches!(coerce(3, ""), Err(PatchError::InvalidFloat { .. })));
    }

    #[test]
    fn apply_value_writes_matching_field() {
        let mut row = japan();
        apply_value(&mut row, 1, &CellValue::Integer(5)).unwrap();
        apply_value(&mut row, 3, &CellValue::Float(1.5)).unwrap();
        assert_eq!(row.population, 5);
        assert_eq!(row.gdp_per_capita, 1.5);
        assert_eq!(row.life_expectancy, 82.603);
    }

    #[test]
    fn apply_value_rejects_unknown_column() {
        let mut row = japan();
        assert_eq!(
            apply_value(&mut row, 4, &CellValue::Float(1.0)),
            Err(PatchError::UnknownColumn(4))
        );
        assert_eq!(row, japan());
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = coerce(1, "abc").unwrap_err();
        assert_eq!(err.to_string(), "column 1: 'abc' is not an integer");
    }
}

//! Conditional cell styling for the summary table.
//!
//! Each numeric column is ranked on its own. Rows whose value is at or above
//! the column's 5th largest value get a tinted background; rows equal to the
//! column maximum also get a border.
//!
//! Ties are inclusive and order independent: duplicates count towards the
//! top 5, every row at or above the threshold is highlighted (so a tie on
//! the boundary can highlight more than five rows), and every row sharing
//! the maximum gets the border. A table with fewer than five rows highlights
//! all of them.

use gm_db::models::{CountrySummary, Metric};

/// How many rows per column get the background highlight.
pub const TOP_N: usize = 5;

/// Which kind of highlight a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Row is in the column's top 5.
    TopN,
    /// Row holds the column maximum.
    Max,
}

/// One styling rule: a CSS declaration applied to some rows of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub metric: Metric,
    pub highlight: Highlight,
    /// Summary row indices the rule applies to, ascending.
    pub rows: Vec<usize>,
    pub css: &'static str,
}

/// Background and border CSS per column.
pub fn palette(metric: Metric) -> (&'static str, &'static str) {
    match metric {
        // red
        Metric::Population => ("background-color: #f8d7da99;", "border: solid 2px #ed969e;"),
        // blue
        Metric::LifeExpectancy => ("background-color: #cce5ff99;", "border: solid 2px #80beff;"),
        // green
        Metric::GdpPerCapita => ("background-color: #d4edda77;", "border: solid 2px #9ed6ac;"),
    }
}

/// The `n`-th largest value, counting duplicates.
///
/// With fewer than `n` values this is the smallest value. `None` for an
/// empty slice or `n == 0`. NaNs never rank.
pub fn nth_largest(values: &[f64], n: usize) -> Option<f64> {
    if n == 0 {
        return None;
    }
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.get(n - 1).or(sorted.last()).copied()
}

/// Build the styling rules for every numeric column of `rows`.
///
/// Rules come out per column as (top-N background, maximum border), in
/// [`Metric::ALL`] order. An empty table yields no rules.
pub fn style_rules(rows: &[CountrySummary]) -> Vec<StyleRule> {
    let mut rules = Vec::with_capacity(Metric::ALL.len() * 2);

    for metric in Metric::ALL {
        let values: Vec<f64> = rows.iter().map(|r| metric.summary_value(r)).collect();
        let (Some(top_n), Some(top_1)) = (nth_largest(&values, TOP_N), nth_largest(&values, 1))
        else {
            continue;
        };
        let (background, border) = palette(metric);

        let matching = |pred: &dyn Fn(f64) -> bool| -> Vec<usize> {
            values
                .iter()
                .enumerate()
                .filter(|(_, v)| pred(**v))
                .map(|(i, _)| i)
                .collect()
        };

        rules.push(StyleRule {
            metric,
            highlight: Highlight::TopN,
            rows: matching(&|v: f64| v >= top_n),
            css: background,
        });
        rules.push(StyleRule {
            metric,
            highlight: Highlight::Max,
            rows: matching(&|v: f64| v == top_1),
            css: border,
        });
    }

    rules
}

/// Inline CSS for one cell, combining every rule that applies to it.
pub fn cell_css(rules: &[StyleRule], row_index: usize, metric: Metric) -> String {
    rules
        .iter()
        .filter(|r| r.metric == metric && r.rows.binary_search(&row_index).is_ok())
        .map(|r| r.css)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, population: i64, life: f64, gdp: f64) -> CountrySummary {
        CountrySummary {
            country: country.to_string(),
            population,
            life_expectancy: life,
            gdp_per_capita: gdp,
        }
    }

    fn sample_rows() -> Vec<CountrySummary> {
        vec![
            row("A", 10, 50.0, 100.0),
            row("B", 70, 60.0, 900.0),
            row("C", 30, 70.0, 300.0),
            row("D", 50, 80.0, 500.0),
            row("E", 20, 55.0, 200.0),
            row("F", 60, 65.0, 600.0),
            row("G", 40, 75.0, 400.0),
        ]
    }

    fn rule(rules: &[StyleRule], metric: Metric, highlight: Highlight) -> &StyleRule {
        rules
            .iter()
            .find(|r| r.metric == metric && r.highlight == highlight)
            .unwrap()
    }

    #[test]
    fn nth_largest_counts_duplicates() {
        assert_eq!(nth_largest(&[5.0, 9.0, 9.0, 1.0], 2), Some(9.0));
        assert_eq!(nth_largest(&[5.0, 9.0, 9.0, 1.0], 3), Some(5.0));
    }

    #[test]
    fn nth_largest_short_and_empty() {
        assert_eq!(nth_largest(&[3.0, 1.0], 5), Some(1.0));
        assert_eq!(nth_largest(&[], 5), None);
        assert_eq!(nth_largest(&[1.0], 0), None);
    }

    #[test]
    fn largest_population_gets_border() {
        let rules = style_rules(&sample_rows());
        let max = rule(&rules, Metric::Population, Highlight::Max);
        assert_eq!(max.rows, vec![1]);
        assert_eq!(max.css, "border: solid 2px #ed969e;");
    }

    #[test]
    fn top_five_population_get_background() {
        let rules = style_rules(&sample_rows());
        let top = rule(&rules, Metric::Population, Highlight::TopN);
        // 70, 60, 50, 40, 30 -> B, F, D, G, C
        assert_eq!(top.rows, vec![1, 2, 3, 5, 6]);
        assert_eq!(top.css, "background-color: #f8d7da99;");
    }

    #[test]
    fn columns_are_ranked_independently() {
        let rules = style_rules(&sample_rows());
        assert_eq!(rule(&rules, Metric::LifeExpectancy, Highlight::Max).rows, vec![3]);
        assert_eq!(rule(&rules, Metric::GdpPerCapita, Highlight::Max).rows, vec![1]);
        assert_eq!(rules.len(), 6);
    }

    #[test]
    fn boundary_tie_highlights_more_than_five() {
        let mut rows = sample_rows();
        // E ties C for 5th place in population
        rows[4].population = 30;
        let rules = style_rules(&rows);
        let top = rule(&rules, Metric::Population, Highlight::TopN);
        assert_eq!(top.rows, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn tied_maximum_borders_every_holder() {
        let mut rows = sample_rows();
        rows[0].population = 70;
        let rules = style_rules(&rows);
        assert_eq!(rule(&rules, Metric::Population, Highlight::Max).rows, vec![0, 1]);
    }

    #[test]
    fn small_table_highlights_everything() {
        let rows = vec![row("A", 1, 1.0, 1.0), row("B", 2, 2.0, 2.0)];
        let rules = style_rules(&rows);
        assert_eq!(rule(&rules, Metric::Population, Highlight::TopN).rows, vec![0, 1]);
    }

    #[test]
    fn empty_table_has_no_rules() {
        assert!(style_rules(&[]).is_empty());
    }

    #[test]
    fn cell_css_combines_background_and_border() {
        let rules = style_rules(&sample_rows());
        assert_eq!(
            cell_css(&rules, 1, Metric::Population),
            "background-color: #f8d7da99; border: solid 2px #ed969e;"
        );
        assert_eq!(cell_css(&rules, 0, Metric::Population), "");
    }
}

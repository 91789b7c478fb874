//! Gapminder Dashboard
//!
//! A summary table of each country's maximum population, life expectancy
//! and GDP per capita across all years, linked to two line charts that show
//! the full history of whichever countries are selected in the table.
//!
//! Data flow:
//! 1. `build.rs` copies `gapminder.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and
//!    aggregated into the per-country summary shown by `SummaryTable`.
//! 4. When the visible selection changes, the selected countries' rows are
//!    queried and passed to `renderMultiLineChart()` for D3.js rendering.

use anyhow::Context;
use dioxus::prelude::*;
use gm_chart_ui::components::{Card, DetailChartView, ErrorDisplay, LoadingSpinner, SummaryTable};
use gm_chart_ui::js_bridge;
use gm_chart_ui::state::AppState;
use gm_data::chart::{self, detail_body, DetailChart, GDP_PER_CAPITA_CHART, POPULATION_CHART};
use gm_data::grid::SummaryGrid;
use gm_data::selection;
use gm_data::styling;
use gm_db::models::{labels, CountrySummary, Metric, Observation};
use gm_db::Database;

/// Gapminder country-year observations.
const GAPMINDER_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/gapminder.csv"));

const DETAIL_CHARTS: [DetailChart; 2] = [POPULATION_CHART, GDP_PER_CAPITA_CHART];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gapminder-dashboard-root"))
        .launch(App);
}

/// Everything the dashboard needs once the CSV is in.
#[derive(Debug)]
struct Dataset {
    db: Database,
    summary: Vec<CountrySummary>,
    year_range: Option<(i32, i32)>,
}

fn load_dataset(csv: &str) -> anyhow::Result<Dataset> {
    let db = Database::new().context("Database initialization failed")?;
    let loaded = db
        .load_observations(csv)
        .context("Failed to load gapminder.csv")?;
    let summary = db.query_country_summaries()?;
    let year_range = db.query_year_range()?;
    log::info!(
        "[GM Debug] gm-dashboard: {} observations, {} countries, years {:?}",
        loaded,
        summary.len(),
        year_range
    );
    Ok(Dataset {
        db,
        summary,
        year_range,
    })
}

/// D3 config for one detail chart.
fn chart_config(chart: DetailChart, year_range: Option<(i32, i32)>) -> serde_json::Value {
    let y_format = match chart.metric {
        Metric::Population => "si",
        _ => "comma",
    };
    serde_json::json!({
        "title": chart.title,
        "xLabel": labels::YEAR,
        "yLabel": chart.metric.label(),
        "seriesKey": "country",
        "xDomain": year_range.map(|(first, last)| vec![first, last]),
        "yFormat": y_format,
    })
}

fn render_detail_chart(chart: DetailChart, subset: &[Observation], year_range: Option<(i32, i32)>) {
    let data_json = serde_json::to_string(&chart::series(subset, chart.metric)).unwrap_or_default();
    let config_json = serde_json::to_string(&chart_config(chart, year_range)).unwrap_or_default();
    js_bridge::render_multi_line_chart(chart.container_id, &data_json, &config_json);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize database on mount
    use_effect(move || match load_dataset(GAPMINDER_CSV) {
        Ok(dataset) => {
            state.grid.set(SummaryGrid::new(dataset.summary));
            state.year_range.set(dataset.year_range);
            state.db.set(Some(dataset.db));
            state.loading.set(false);
        }
        Err(e) => {
            log::error!("Failed to load dataset: {:#}", e);
            state.error_msg.set(Some(format!("{:#}", e)));
            state.loading.set(false);
        }
    });

    // Countries behind the selected rows that are still visible. Only
    // changes of this list re-query and redraw the charts.
    let countries = use_memo(move || {
        let grid = state.grid.read();
        let rows = state.selection.read().effective(&grid.view());
        selection::selected_countries(grid.base(), &rows)
    });

    // Re-render both detail charts whenever the selected countries change
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if state.error_msg.peek().is_some() {
            return;
        }

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let countries = countries();
        let year_range = (state.year_range)();

        if countries.is_empty() {
            for chart in DETAIL_CHARTS {
                js_bridge::destroy_chart(chart.container_id);
            }
            return;
        }

        let subset = match db.query_observations_for_countries(&countries) {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to query selected countries: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to query selected countries: {}", e)));
                return;
            }
        };
        log::info!(
            "[GM Debug] gm-dashboard: charting {} rows for {:?}",
            subset.len(),
            countries
        );

        // Initialize D3.js chart scripts
        js_bridge::init_charts();
        for chart in DETAIL_CHARTS {
            render_detail_chart(chart, &subset, year_range);
        }
    });

    rsx! {
        div {
            style: "padding: 16px; box-sizing: border-box; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner { label: "Loading Gapminder data...".to_string() }
            } else {
                div {
                    style: "display: grid; grid-template-columns: 7fr 5fr; gap: 16px; align-items: start;",

                    Card {
                        height: "800px".to_string(),
                        full_screen: true,
                        h3 {
                            style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;",
                            "Maximum "
                            code { "gapminder" }
                            " values per country"
                        }
                        if let Some(err) = (state.edit_error)() {
                            ErrorDisplay {
                                message: err,
                                on_dismiss: move |_| state.edit_error.set(None),
                            }
                        }
                        SummaryTable {}
                        HighlightLegend {}
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        for chart in DETAIL_CHARTS {
                            Card {
                                key: "{chart.container_id}",
                                height: "400px".to_string(),
                                DetailChartView { chart, body: detail_body(chart, &countries.read()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Legend explaining the cell highlighting colors.
#[component]
fn HighlightLegend() -> Element {
    rsx! {
        div {
            style: "margin-top: 8px; padding: 6px 10px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; display: flex; gap: 16px; flex-wrap: wrap;",
            for metric in Metric::ALL {
                {
                    let (background, border) = styling::palette(metric);
                    rsx! {
                        div {
                            key: "{metric.label()}",
                            style: "display: flex; align-items: center; gap: 4px;",
                            span {
                                style: "display: inline-block; width: 16px; height: 12px; border-radius: 2px; {background} {border}",
                            }
                            "{metric.label()}: top {styling::TOP_N}, bordered at maximum"
                        }
                    }
                }
            }
        }
    }
}

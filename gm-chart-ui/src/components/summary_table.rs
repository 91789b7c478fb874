//! Editable summary table: per-country maxima with sorting, column filters,
//! row selection and conditional highlighting.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_data::editor::CellEditor;
use gm_data::grid::{Column, RangeFilter, SortDirection, SortState};
use gm_data::styling;
use gm_db::models::Metric;

const TH_STYLE: &str = "padding: 6px 8px; text-align: left; border-bottom: 2px solid #dee2e6; background: #f8f9fa; cursor: pointer; user-select: none; white-space: nowrap; position: sticky; top: 0;";
const FILTER_TH_STYLE: &str = "padding: 4px 8px; border-bottom: 1px solid #dee2e6; background: #fff; position: sticky; top: 33px;";
const EDIT_BUTTON_STYLE: &str = "margin-left: 4px; padding: 0 2px; border: none; background: transparent; color: #adb5bd; cursor: pointer; font-size: 11px;";
const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 2px 4px; font-size: 12px; border: 1px solid #ced4da; border-radius: 3px;";

/// One rendered cell, copied out of the grid so no borrow is held in RSX.
#[derive(Clone, PartialEq)]
struct CellView {
    column: Column,
    text: String,
    css: String,
}

#[derive(Clone, PartialEq)]
struct RowView {
    index: usize,
    selected: bool,
    cells: Vec<CellView>,
}

/// Apply the editor's draft to the grid, or record why it was rejected.
fn commit_edit(mut state: AppState, mut editor: Signal<CellEditor>, row_index: usize, column: Column) {
    let result = editor
        .write()
        .commit(&mut state.grid.write(), row_index, column);
    match result {
        // Already committed or cancelled
        None => {}
        Some(Ok(_)) => state.edit_error.set(None),
        Some(Err(e)) => {
            log::warn!("[GM Debug] summary_table: edit rejected: {}", e);
            state.edit_error.set(Some(format!("Edit rejected: {}", e)));
        }
    }
}

#[component]
pub fn SummaryTable() -> Element {
    let mut state = use_context::<AppState>();
    let mut editor = use_signal(CellEditor::new);
    let mut country_text = use_signal(String::new);

    // Highlights follow edited values
    let rules = use_memo(move || styling::style_rules(state.grid.read().rows()));

    if state.grid.read().is_empty() {
        return rsx! {
            div { style: "padding: 16px; color: #666;", "No countries loaded." }
        };
    }

    let (rows, total, sort) = {
        let grid = state.grid.read();
        let selection = state.selection.read();
        let rules = rules.read();
        let rows: Vec<RowView> = grid
            .view()
            .into_iter()
            .map(|index| RowView {
                index,
                selected: selection.contains(index),
                cells: Column::ALL
                    .iter()
                    .map(|&column| CellView {
                        column,
                        text: grid.display_value(index, column),
                        css: match column {
                            Column::Country => String::new(),
                            Column::Metric(m) => styling::cell_css(&rules, index, m),
                        },
                    })
                    .collect(),
            })
            .collect();
        (rows, grid.len(), grid.sort())
    };
    let shown = rows.len();
    let selected = state.selection.read().len();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px; font-size: 13px; color: #555;",
            span { "Showing {shown} of {total} countries, {selected} selected" }
            button {
                style: "font-size: 12px; padding: 2px 8px; cursor: pointer;",
                disabled: selected == 0,
                onclick: move |_| state.selection.write().clear(),
                "Clear selection"
            }
            button {
                style: "font-size: 12px; padding: 2px 8px; cursor: pointer;",
                onclick: move |_| {
                    country_text.set(String::new());
                    state.grid.write().clear_filters();
                },
                "Clear filters"
            }
        }
        div {
            style: "flex: 1; min-height: 0; overflow: auto;",
            table {
                style: "width: 100%; border-collapse: separate; border-spacing: 0; font-size: 13px;",
                thead {
                    tr {
                        for column in Column::ALL {
                            th {
                                key: "{column.index()}",
                                style: TH_STYLE,
                                title: "Click to sort",
                                onclick: move |_| state.grid.write().toggle_sort(column),
                                "{column.label()}{sort_marker(sort, column)}"
                            }
                        }
                    }
                    tr {
                        th {
                            style: FILTER_TH_STYLE,
                            input {
                                style: INPUT_STYLE,
                                r#type: "text",
                                placeholder: "Filter...",
                                value: "{country_text}",
                                oninput: move |e| {
                                    let text = e.value();
                                    state.grid.write().set_country_filter(&text);
                                    country_text.set(text);
                                },
                            }
                        }
                        for metric in Metric::ALL {
                            th {
                                key: "filter-{metric.label()}",
                                style: FILTER_TH_STYLE,
                                RangeFilterInput { metric }
                            }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        {
                            let RowView { index, selected, cells } = row;
                            let row_style = if selected { "background: #e7f1ff;" } else { "" };
                            rsx! {
                                tr {
                                    key: "{index}",
                                    style: "cursor: pointer; {row_style}",
                                    onclick: move |_| state.selection.write().toggle(index),
                                    for cell in cells {
                                        {
                                            let align = if cell.column == Column::Country { "left" } else { "right" };
                                            let weight = if selected && cell.column == Column::Country { "font-weight: 600;" } else { "" };
                                            rsx! {
                                                td {
                                                    key: "{cell.column.index()}",
                                                    style: "padding: 4px 8px; border-bottom: 1px solid #f1f3f5; text-align: {align}; {weight} {cell.css}",
                                                    if editor.read().is_open_at(index, cell.column) {
                                                        input {
                                                            style: INPUT_STYLE,
                                                            r#type: "text",
                                                            autofocus: true,
                                                            value: "{editor.read().draft()}",
                                                            onclick: move |e| e.stop_propagation(),
                                                            oninput: move |e| editor.write().set_draft(e.value()),
                                                            onkeydown: move |e| match e.key() {
                                                                Key::Enter => commit_edit(state, editor, index, cell.column),
                                                                Key::Escape => editor.write().cancel(),
                                                                _ => {}
                                                            },
                                                            onblur: move |_| commit_edit(state, editor, index, cell.column),
                                                        }
                                                    } else {
                                                        "{cell.text}"
                                                        button {
                                                            style: EDIT_BUTTON_STYLE,
                                                            title: "Edit cell",
                                                            // Row clicks toggle selection
                                                            onclick: move |e| {
                                                                e.stop_propagation();
                                                                let grid = state.grid.read();
                                                                editor.write().open(&grid, index, cell.column);
                                                            },
                                                            "\u{270e}"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sort_marker(sort: Option<SortState>, column: Column) -> &'static str {
    match sort {
        Some(s) if s.column == column => match s.direction {
            SortDirection::Ascending => " \u{25b2}",
            SortDirection::Descending => " \u{25bc}",
        },
        _ => "",
    }
}

/// Min/max inputs for one numeric column.
#[component]
fn RangeFilterInput(metric: Metric) -> Element {
    let mut state = use_context::<AppState>();
    let mut min_text = use_signal(String::new);
    let mut max_text = use_signal(String::new);

    // Inputs go blank when the filters are cleared elsewhere
    use_effect(move || {
        if state.grid.read().range_filter(metric).is_open() {
            let (min, max) = (min_text.peek().clone(), max_text.peek().clone());
            if !RangeFilter::from_inputs(&min, &max).is_open() {
                min_text.set(String::new());
                max_text.set(String::new());
            }
        }
    });

    let mut apply = move || {
        let filter = RangeFilter::from_inputs(&min_text.peek(), &max_text.peek());
        state.grid.write().set_range_filter(metric, filter);
    };

    rsx! {
        div {
            style: "display: flex; gap: 4px;",
            input {
                style: INPUT_STYLE,
                r#type: "number",
                placeholder: "min",
                value: "{min_text}",
                oninput: move |e| {
                    min_text.set(e.value());
                    apply();
                },
            }
            input {
                style: INPUT_STYLE,
                r#type: "number",
                placeholder: "max",
                value: "{max_text}",
                oninput: move |e| {
                    max_text.set(e.value());
                    apply();
                },
            }
        }
    }
}

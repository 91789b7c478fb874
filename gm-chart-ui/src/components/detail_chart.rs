//! A detail chart card body: the D3 container, or a placeholder while
//! nothing is selected.

use super::Placeholder;
use dioxus::prelude::*;
use gm_data::chart::{DetailBody, DetailChart};

#[component]
pub fn DetailChartView(chart: DetailChart, body: DetailBody) -> Element {
    match body {
        DetailBody::Placeholder(message) => rsx! {
            Placeholder { message: message.to_string() }
        },
        DetailBody::Chart(container_id) => rsx! {
            div {
                id: "{container_id}",
                style: "width: 100%; flex: 1; min-height: 0;",
                aria_label: "{chart.title}",
            }
        },
    }
}

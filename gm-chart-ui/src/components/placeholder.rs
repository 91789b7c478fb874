//! Muted message shown in place of a chart.

use dioxus::prelude::*;

#[component]
pub fn Placeholder(message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; height: 100%; min-height: 120px;",
            span {
                style: "color: lightgrey;",
                "{message}"
            }
        }
    }
}

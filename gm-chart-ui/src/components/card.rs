//! Bordered card with an optional full-screen toggle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// CSS height when not expanded (e.g. "400px")
    pub height: String,
    /// Show a button that expands the card to fill the viewport
    #[props(default = false)]
    pub full_screen: bool,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let mut expanded = use_signal(|| false);

    let frame = if expanded() {
        "position: fixed; inset: 0; z-index: 900; height: auto;".to_string()
    } else {
        format!("position: relative; height: {};", props.height)
    };

    rsx! {
        div {
            style: "{frame} display: flex; flex-direction: column; box-sizing: border-box; padding: 16px; background: #fff; border: 1px solid #dee2e6; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05); overflow: hidden;",
            if props.full_screen {
                button {
                    style: "position: absolute; top: 8px; right: 8px; border: 1px solid #ced4da; background: #f8f9fa; border-radius: 4px; font-size: 12px; cursor: pointer; padding: 2px 8px;",
                    onclick: move |_| expanded.toggle(),
                    if expanded() { "Close" } else { "Expand" }
                }
            }
            {props.children}
        }
    }
}

//! Error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// When set, a close button is shown and calls this handler.
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            div {
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    style: "border: none; background: transparent; color: #C62828; cursor: pointer; font-size: 16px;",
                    title: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "\u{00d7}"
                }
            }
        }
    }
}

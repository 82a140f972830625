//! Error display component.

use super::icon::{Icon, IconName};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a Bootstrap alert.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "alert alert-danger d-flex align-items-center gap-2",
            role: "alert",
            Icon { name: IconName::AlertCircle }
            span {
                strong { "Error: " }
                "{props.message}"
            }
        }
    }
}

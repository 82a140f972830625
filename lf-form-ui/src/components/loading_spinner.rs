//! Loading spinner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading...".to_string())]
    pub label: String,
}

/// Small inline loading indicator.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "d-flex align-items-center gap-2 text-muted py-2",
            span {
                class: "spinner-border spinner-border-sm",
                "aria-hidden": "true",
            }
            span { "{props.label}" }
        }
    }
}

//! Inline SVG icons (Lucide outlines).

use dioxus::prelude::*;

/// Icons used by the report forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    MapPin,
    AlertCircle,
}

impl IconName {
    /// SVG path data on a 24x24 grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::MapPin => &[
                "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0",
                "M15 10a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
            ],
            Self::AlertCircle => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
                "M12 8v4",
                "M12 16h.01",
            ],
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::MapPin => "icon icon-map-pin",
            Self::AlertCircle => "icon icon-alert-circle",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    pub name: IconName,
    /// Width and height in pixels
    #[props(default = 16)]
    pub size: u32,
}

/// Stateless icon; decorative, so hidden from assistive tech.
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    rsx! {
        svg {
            class: props.name.class(),
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in props.name.paths().iter() {
                path { d: *d }
            }
        }
    }
}

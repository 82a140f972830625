//! Reusable Dioxus RSX components for found-item forms.

mod error_display;
mod icon;
mod loading_spinner;
mod room_select_field;

pub use error_display::ErrorDisplay;
pub use icon::{Icon, IconName};
pub use loading_spinner::LoadingSpinner;
pub use room_select_field::RoomSelectField;

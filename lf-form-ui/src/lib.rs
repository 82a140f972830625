//! Shared Dioxus components for found-item report forms.
//!
//! This crate provides:
//! - `hooks`: `use_room_select`, which wires a [`lf_rooms::RoomSelect`]
//!   controller into Dioxus signals and starts its first load
//! - `components`: reusable RSX components (room field, icons, status boxes)

pub mod components;
pub mod hooks;

//! Found Item Report
//!
//! A single-page form for recording an item left behind at a property:
//! what was found and in which room. The room field suggests the rooms
//! already known for the property or changeover and creates new ones on the
//! fly when the typed name is not among them.
//!
//! Data flow:
//! 1. `AppConfig` is read from build-time env, then the page query may swap
//!    in another owner.
//! 2. With `LF_API_BASE_URL` set, rooms come from the remote room service;
//!    otherwise an in-memory service seeded with demo rooms is used.
//! 3. `use_room_select` loads the rooms after mount and `RoomSelectField`
//!    renders once that load settles.
//! 4. Submitting reads the room field's value. A failed room creation blocks
//!    submission until the user commits a room again.

mod config;

use config::{AppConfig, DEMO_ROOMS};
use dioxus::prelude::*;
use lf_form_ui::components::{ErrorDisplay, LoadingSpinner, RoomSelectField};
use lf_form_ui::hooks::use_room_select;
use lf_rooms::http::HttpRoomService;
use lf_rooms::{CommitOutcome, MemoryRoomService, OwnerId, RoomService};
use std::rc::Rc;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("report-found-item-root"))
        .launch(App);
}

/// Owner requested through the page URL, if any.
fn page_owner() -> Option<OwnerId> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    config::owner_from_params(|key| params.get(key))
}

fn build_service(config: &AppConfig) -> Rc<dyn RoomService> {
    match &config.service {
        Some(service) => {
            log::info!("Using room service at {}", service.base_url);
            Rc::new(HttpRoomService::new(service.clone()))
        }
        None => {
            log::info!("No room service configured, using demo rooms");
            Rc::new(
                MemoryRoomService::new()
                    .with_rooms(config.owner.clone(), DEMO_ROOMS.iter().copied()),
            )
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        AppConfig::from_build_env()
            .map(|config| config.with_owner(page_owner()))
            .map_err(|e| {
                log::error!("Invalid configuration: {:#}", e);
                format!("Invalid configuration: {e:#}")
            })
    });

    let body = match config {
        Ok(config) => rsx! { ReportForm { config } },
        Err(message) => rsx! { ErrorDisplay { message } },
    };

    rsx! {
        div {
            class: "container py-4",
            style: "max-width: 640px;",
            h1 {
                class: "h4 mb-3",
                "Report a Found Item"
            }
            {body}
        }
    }
}

/// A submitted report, shown back to the user.
#[derive(Debug, Clone, PartialEq)]
struct FoundItemReport {
    item: String,
    location: String,
}

#[component]
fn ReportForm(config: AppConfig) -> Element {
    let service = use_hook(|| build_service(&config));
    let room = use_room_select(config.owner.clone(), service);

    let mut description = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut create_failed = use_signal(|| false);
    let mut validated = use_signal(|| false);
    let mut submitted = use_signal(|| None::<FoundItemReport>);

    let room_view = room.view();
    let known_rooms = room.rooms().len();
    let scope = scope_label(room.controller().owner());

    let reader = room.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        validated.set(true);

        if create_failed() {
            error_msg.set(Some(
                "The new room could not be saved. Pick a room or try another name.".to_string(),
            ));
            return;
        }
        if reader.view().pending || !reader.is_committed() {
            error_msg.set(Some(
                "Still confirming the room, submit again in a moment.".to_string(),
            ));
            return;
        }
        let item = description().trim().to_string();
        let location = reader.value();
        if item.is_empty() || location.is_empty() {
            error_msg.set(Some(
                "Please describe the item and where it was found.".to_string(),
            ));
            return;
        }

        log::info!("Found item reported: {:?} in {:?}", item, location);
        error_msg.set(None);
        submitted.set(Some(FoundItemReport { item, location }));
    };

    let on_room_commit = move |outcome: CommitOutcome| {
        if outcome != CommitOutcome::Busy && outcome != CommitOutcome::Ignored {
            create_failed.set(false);
            error_msg.set(None);
        }
    };

    let on_room_error = move |message: String| {
        create_failed.set(true);
        error_msg.set(Some(format!("Could not add room: {message}")));
    };

    let form_class = if validated() {
        "needs-validation was-validated"
    } else {
        "needs-validation"
    };

    rsx! {
        form {
            class: "{form_class}",
            novalidate: true,
            onsubmit: on_submit,

            if let Some(err) = error_msg() {
                ErrorDisplay { message: err }
            }

            div {
                class: "mb-3",
                label {
                    r#for: "description",
                    class: "form-label",
                    "Item"
                }
                input {
                    r#type: "text",
                    id: "description",
                    class: "form-control",
                    placeholder: "What was found?",
                    required: true,
                    value: "{description}",
                    oninput: move |evt: Event<FormData>| description.set(evt.value()),
                }
            }

            if !room_view.is_rendered() {
                LoadingSpinner { label: "Loading rooms...".to_string() }
            }
            RoomSelectField {
                select: room.clone(),
                on_commit: on_room_commit,
                on_error: on_room_error,
            }
            if room_view.is_rendered() && !room_view.is_degraded() {
                p {
                    class: "form-text mt-n2",
                    "{known_rooms} rooms known for this {scope}"
                }
            }

            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: room_view.pending,
                "Save report"
            }

            if let Some(report) = submitted() {
                div {
                    class: "alert alert-success mt-3",
                    role: "status",
                    "Recorded "
                    strong { "{report.item}" }
                    " found in "
                    strong { "{report.location}" }
                }
            }
        }
    }
}

fn scope_label(owner: &OwnerId) -> &'static str {
    if owner.is_changeover() {
        "changeover"
    } else {
        "property"
    }
}

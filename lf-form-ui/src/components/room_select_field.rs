//! "Location Found" field: pick an existing room or type a new one.

use super::icon::{Icon, IconName};
use crate::hooks::RoomSelectHandle;
use dioxus::prelude::*;
use lf_rooms::CommitOutcome;
use std::rc::Rc;

/// Props for RoomSelectField
#[derive(Props, Clone, PartialEq)]
pub struct RoomSelectFieldProps {
    /// Controller handle from `use_room_select`
    pub select: RoomSelectHandle,
    /// DOM id of the input; the suggestion list gets `{id}-suggestions`
    #[props(default = "location".to_string())]
    pub id: String,
    #[props(default = "Location Found".to_string())]
    pub label: String,
    #[props(default = "Select or type a room name...".to_string())]
    pub placeholder: String,
    /// Placeholder once loading failed and suggestions are gone
    #[props(default = "Enter room name...".to_string())]
    pub degraded_placeholder: String,
    /// Shown by the form's validation styling while the field is empty
    #[props(default = "Please specify where the item was found".to_string())]
    pub invalid_message: String,
    /// Called after every commit that did not fail
    pub on_commit: Option<EventHandler<CommitOutcome>>,
    /// Called with the message when creating a room fails
    pub on_error: Option<EventHandler<String>>,
}

/// Required text input backed by a datalist of known room names.
///
/// Renders nothing until the first room load settles. If that load failed
/// the field falls back to a plain input without suggestions.
#[component]
pub fn RoomSelectField(props: RoomSelectFieldProps) -> Element {
    let view = props.select.view();
    let mut input_el = use_signal(|| None::<Rc<MountedData>>);
    let mut focused_requests = use_signal(|| 0u64);

    // Effects run after the DOM update, so the input is enabled again by the
    // time a failed create asks for focus.
    let focus_source = props.select.clone();
    use_effect(move || {
        let requests = focus_source.view().focus_requests;
        if requests <= *focused_requests.peek() {
            return;
        }
        focused_requests.set(requests);
        if let Some(el) = input_el() {
            spawn(async move {
                if let Err(e) = el.set_focus(true).await {
                    log::warn!("Could not refocus room field: {:?}", e);
                }
            });
        }
    });

    if !view.is_rendered() {
        return rsx! {};
    }

    let typing = props.select.clone();
    let on_input = move |evt: Event<FormData>| {
        typing.set_input(&evt.value());
    };

    let committing = props.select.clone();
    let on_commit = props.on_commit;
    let on_error = props.on_error;
    let on_change = move |evt: Event<FormData>| {
        let select = committing.clone();
        let raw = evt.value();
        spawn(async move {
            match select.confirm(&raw).await {
                Ok(outcome) => {
                    if let Some(handler) = on_commit {
                        handler.call(outcome);
                    }
                }
                Err(e) => {
                    if let Some(handler) = on_error {
                        handler.call(e.to_string());
                    }
                }
            }
        });
    };

    let on_mounted = move |evt: MountedEvent| {
        input_el.set(Some(evt.data()));
    };

    let id = props.id.clone();
    let list_id = format!("{id}-suggestions");

    rsx! {
        div {
            class: "mb-3",
            label {
                r#for: "{id}",
                class: "form-label d-flex align-items-center gap-2",
                Icon { name: IconName::MapPin }
                "{props.label}"
            }
            if view.is_degraded() {
                input {
                    r#type: "text",
                    id: "{id}",
                    class: "form-control",
                    placeholder: "{props.degraded_placeholder}",
                    required: true,
                    autocomplete: "off",
                    spellcheck: "false",
                    value: "{view.value}",
                    oninput: on_input,
                    onchange: on_change,
                    onmounted: on_mounted,
                }
                div {
                    class: "invalid-feedback",
                    "{props.invalid_message}"
                }
            } else {
                div {
                    class: "position-relative",
                    input {
                        r#type: "text",
                        id: "{id}",
                        class: "form-control",
                        list: "{list_id}",
                        placeholder: "{props.placeholder}",
                        required: true,
                        autocomplete: "off",
                        spellcheck: "false",
                        disabled: view.pending,
                        value: "{view.value}",
                        oninput: on_input,
                        onchange: on_change,
                        onmounted: on_mounted,
                    }
                    datalist {
                        id: "{list_id}",
                        for name in view.suggestions.iter() {
                            option { value: "{name}" }
                        }
                    }
                    div {
                        class: "invalid-feedback",
                        "{props.invalid_message}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_room_select_with;
    use async_trait::async_trait;
    use lf_rooms::{MemoryRoomService, OwnerId, Room, RoomError, RoomSelect, RoomService};

    struct UnavailableService;

    #[async_trait(?Send)]
    impl RoomService for UnavailableService {
        async fn fetch_rooms(&self, _owner: &OwnerId) -> lf_rooms::Result<Vec<Room>> {
            Err(RoomError::Status {
                status: 503,
                message: "unavailable".to_string(),
            })
        }

        async fn create_room(&self, _owner: &OwnerId, _name: &str) -> lf_rooms::Result<Room> {
            Err(RoomError::Rejected("unavailable".to_string()))
        }
    }

    #[component]
    fn Harness(select: RoomSelect) -> Element {
        let handle = use_room_select_with(move || select);
        rsx! {
            RoomSelectField { select: handle }
        }
    }

    fn owner() -> OwnerId {
        OwnerId::property("42")
    }

    fn loaded(service: impl RoomService + 'static) -> RoomSelect {
        let select = RoomSelect::new(owner(), Rc::new(service));
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(select.load());
        select
    }

    fn render(select: RoomSelect) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { select });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_ready_field_lists_every_room_in_order() {
        let service = MemoryRoomService::new().with_rooms(owner(), ["Kitchen", "Garage"]);
        let html = render(loaded(service));

        assert!(html.contains("Location Found"));
        assert!(html.contains(r#"id="location""#));
        assert!(html.contains(r#"list="location-suggestions""#));
        assert!(html.contains("required"));
        assert!(html.contains(r#"<datalist id="location-suggestions""#));
        assert_eq!(html.matches("<option").count(), 2);

        let kitchen = html.find(r#"value="Kitchen""#).expect("Kitchen option");
        let garage = html.find(r#"value="Garage""#).expect("Garage option");
        assert!(kitchen < garage);

        assert!(html.contains("invalid-feedback"));
        assert!(html.contains("Please specify where the item was found"));
        assert!(html.contains("Select or type a room name..."));
    }

    #[test]
    fn test_ready_field_without_rooms_has_empty_datalist() {
        let html = render(loaded(MemoryRoomService::new()));
        assert!(html.contains("<datalist"));
        assert_eq!(html.matches("<option").count(), 0);
    }

    #[test]
    fn test_degraded_field_is_plain_text_input() {
        let html = render(loaded(UnavailableService));

        assert!(html.contains("<input"));
        assert!(html.contains("required"));
        assert!(html.contains("Enter room name..."));
        assert!(!html.contains("<datalist"));
        assert!(!html.contains("list="));
        assert!(html.contains("invalid-feedback"));
        assert!(html.contains("Please specify where the item was found"));
    }

    #[test]
    fn test_nothing_renders_before_first_load() {
        let select = RoomSelect::new(owner(), Rc::new(MemoryRoomService::new()));
        let html = render(select);
        assert!(!html.contains("<input"));
        assert!(!html.contains("Location Found"));
    }
}

//! Hooks binding the room select controller to Dioxus signals.

use dioxus::prelude::*;
use lf_rooms::{CommitOutcome, OwnerId, Result, Room, RoomSelect, RoomSelectView, RoomService};
use std::rc::Rc;

/// A room field's controller together with its reactive view.
///
/// Clone it freely: the field component, the form's submit handler and any
/// other reader all see the same state.
#[derive(Clone, PartialEq)]
pub struct RoomSelectHandle {
    select: RoomSelect,
    view: Signal<RoomSelectView>,
}

impl RoomSelectHandle {
    /// Current view. Reading it subscribes the calling component.
    pub fn view(&self) -> RoomSelectView {
        (self.view)()
    }

    /// Trimmed field value for form submission.
    pub fn value(&self) -> String {
        self.select.value()
    }

    /// Rooms from the last successful load.
    pub fn rooms(&self) -> Vec<Room> {
        self.select.rooms()
    }

    /// See [`RoomSelect::is_committed`].
    pub fn is_committed(&self) -> bool {
        self.select.is_committed()
    }

    pub fn set_input(&self, raw: &str) {
        self.select.set_input(raw);
    }

    /// Commit `raw`; see [`RoomSelect::confirm`].
    pub async fn confirm(&self, raw: &str) -> Result<CommitOutcome> {
        self.select.confirm(raw).await
    }

    pub fn controller(&self) -> &RoomSelect {
        &self.select
    }
}

/// Create the room field controller for `owner` and start loading its rooms.
///
/// The first load is spawned after mount, so the caller renders immediately;
/// the field itself stays empty until the load settles.
pub fn use_room_select(owner: OwnerId, service: Rc<dyn RoomService>) -> RoomSelectHandle {
    let handle = use_room_select_with(move || RoomSelect::new(owner, service));

    let loader = handle.select.clone();
    use_effect(move || {
        let loader = loader.clone();
        spawn(async move {
            log::debug!("Loading rooms for {}", loader.owner());
            loader.load().await;
        });
    });

    handle
}

/// Bind a controller built by `init` to a signal, without loading anything.
///
/// The signal starts from the controller's current view and follows every
/// later change.
pub fn use_room_select_with(init: impl FnOnce() -> RoomSelect) -> RoomSelectHandle {
    let select = use_hook(init);

    let initial = select.clone();
    let view = use_signal(move || initial.view());

    let subscriber = select.clone();
    use_hook(move || {
        subscriber.subscribe(move |snapshot| {
            let mut view = view;
            // The owning component may already be gone when a request settles.
            if let Ok(mut current) = view.try_write() {
                *current = snapshot.clone();
            };
        });
    });

    RoomSelectHandle { select, view }
}

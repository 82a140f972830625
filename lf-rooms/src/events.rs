//! Structured events emitted by the room select controller.
//!
//! The controller never writes log lines directly; it hands a [`RoomEvent`]
//! to its [`RoomLog`]. Production code uses [`LogRoomEvents`], which forwards
//! to the `log` facade. Tests swap in a recorder and assert on the events.

use crate::owner::OwnerId;
use crate::room::Room;

/// Something the room select controller did.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    /// A room list fetch is starting.
    LoadStarted { owner: OwnerId },
    /// Rooms were fetched; names are in list order.
    Loaded { count: usize, names: Vec<String> },
    /// Fetching rooms failed and the field degraded to plain text.
    LoadFailed { error: String },
    /// A commit had nothing but whitespace.
    CommitIgnored,
    /// A commit arrived while another operation was still pending.
    CommitBusy { input: String },
    /// Degraded field captured a freeform value.
    FreeformCommitted { value: String },
    /// Input matched a known room; `name` is the stored spelling.
    UsedExisting { input: String, name: String },
    /// A new room is being created.
    Creating { name: String },
    /// The service created a room.
    Created { room: Room },
    /// Room creation failed; the error is surfaced to the caller.
    CreateFailed { name: String, error: String },
}

/// Sink for [`RoomEvent`]s.
pub trait RoomLog {
    fn record(&self, event: &RoomEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRoomEvents;

impl RoomLog for LogRoomEvents {
    fn record(&self, event: &RoomEvent) {
        match event {
            RoomEvent::LoadStarted { owner } => {
                log::debug!("RoomSelect: loading rooms for {}", owner)
            }
            RoomEvent::Loaded { count, names } => {
                log::debug!("RoomSelect: initialized with {} rooms {:?}", count, names)
            }
            RoomEvent::LoadFailed { error } => log::error!("Error loading rooms: {}", error),
            RoomEvent::CommitIgnored => log::trace!("RoomSelect: empty commit ignored"),
            RoomEvent::CommitBusy { input } => {
                log::warn!("RoomSelect: commit of {:?} ignored, operation pending", input)
            }
            RoomEvent::FreeformCommitted { value } => {
                log::debug!("RoomSelect: freeform value {:?}", value)
            }
            RoomEvent::UsedExisting { input, name } => {
                log::debug!("RoomSelect: using existing room {:?} for {:?}", name, input)
            }
            RoomEvent::Creating { name } => log::debug!("RoomSelect: creating new room {:?}", name),
            RoomEvent::Created { room } => {
                log::info!("RoomSelect: room created {:?} (id {})", room.name, room.id)
            }
            RoomEvent::CreateFailed { name, error } => {
                log::error!("RoomSelect: error adding room {:?}: {}", name, error)
            }
        }
    }
}

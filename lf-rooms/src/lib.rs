//! Room lookup and creation for the "Location Found" field of found-item reports.
//!
//! A room is a named location (Kitchen, Garage, ...) that belongs either to a
//! property or to a changeover. This crate holds everything about rooms that
//! does not depend on a UI framework:
//!
//! - `owner`: [`OwnerId`], the property/changeover scope rooms belong to
//! - `room`: the [`Room`] record as returned by the room service
//! - `resolve`: case-insensitive matching of user input against known rooms
//! - `service`: the [`RoomService`] port plus an in-memory implementation
//! - `select`: the [`RoomSelect`] controller driving a single room field
//! - `events`: structured [`RoomEvent`]s emitted by the controller
//! - `http` (feature `api`): a `reqwest` client for the remote room service
//!
//! # Usage
//!
//! ```rust
//! use lf_rooms::{resolve, OwnerId, Resolution, Room};
//!
//! let owner: OwnerId = "1f0c-77aa".parse().unwrap();
//! assert!(owner.is_changeover());
//!
//! let rooms = vec![Room::new(1, "Kitchen"), Room::new(2, "Garage")];
//! match resolve(&rooms, "  kitchen ") {
//!     Resolution::Existing(room) => assert_eq!(room.name, "Kitchen"),
//!     other => panic!("expected an existing room, got {other:?}"),
//! }
//! ```

pub mod error;
pub mod events;
pub mod owner;
pub mod resolve;
pub mod room;
pub mod select;
pub mod service;

#[cfg(feature = "api")]
pub mod http;

pub use error::{Result, RoomError};
pub use events::{LogRoomEvents, RoomEvent, RoomLog};
pub use owner::OwnerId;
pub use resolve::{resolve, Resolution};
pub use room::{Room, RoomId};
pub use select::{CommitOutcome, Phase, RoomSelect, RoomSelectView};
pub use service::{MemoryRoomService, RoomService};

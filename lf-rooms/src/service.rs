//! The room data-access port and an in-memory implementation.

use crate::error::{Result, RoomError};
use crate::owner::OwnerId;
use crate::resolve::{find_room, normalize_input};
use crate::room::{Room, RoomId};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Remote store of rooms, scoped per owner.
///
/// Futures are `?Send`: the field lives on the browser's single UI thread.
#[async_trait(?Send)]
pub trait RoomService {
    /// All rooms for `owner`, in the service's order.
    async fn fetch_rooms(&self, owner: &OwnerId) -> Result<Vec<Room>>;

    /// Create a room named `name` under `owner` and return it as stored.
    ///
    /// Uniqueness is the service's call; a duplicate may come back as an error.
    async fn create_room(&self, owner: &OwnerId, name: &str) -> Result<Room>;
}

/// Room service backed by process memory.
///
/// Used for offline demos and tests. Ids are sequential integers starting
/// at 1, and names are unique per owner ignoring case.
#[derive(Debug)]
pub struct MemoryRoomService {
    rooms: RefCell<HashMap<OwnerId, Vec<Room>>>,
    next_id: Cell<i64>,
}

impl Default for MemoryRoomService {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRoomService {
    pub fn new() -> Self {
        Self {
            rooms: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }
    }

    /// Seed `owner` with rooms named `names`, in order.
    pub fn with_rooms<I, N>(self, owner: OwnerId, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        {
            let mut rooms = self.rooms.borrow_mut();
            let list = rooms.entry(owner).or_default();
            for name in names {
                list.push(Room::new(self.allocate_id(), name));
            }
        }
        self
    }

    /// Number of rooms currently stored for `owner`.
    pub fn room_count(&self, owner: &OwnerId) -> usize {
        self.rooms.borrow().get(owner).map_or(0, Vec::len)
    }

    fn allocate_id(&self) -> RoomId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        RoomId::Number(id)
    }
}

#[async_trait(?Send)]
impl RoomService for MemoryRoomService {
    async fn fetch_rooms(&self, owner: &OwnerId) -> Result<Vec<Room>> {
        Ok(self.rooms.borrow().get(owner).cloned().unwrap_or_default())
    }

    async fn create_room(&self, owner: &OwnerId, name: &str) -> Result<Room> {
        let name = normalize_input(name).ok_or(RoomError::EmptyName)?;
        let mut rooms = self.rooms.borrow_mut();
        let list = rooms.entry(owner.clone()).or_default();
        if let Some(existing) = find_room(list, name) {
            return Err(RoomError::Rejected(format!(
                "room {:?} already exists for {}",
                existing.name, owner
            )));
        }
        let room = Room::new(self.allocate_id(), name);
        list.push(room.clone());
        Ok(room)
    }
}

//! Room records as served by the room service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque room identifier.
///
/// The service hands out either numeric or string keys depending on the
/// backing table, so both are accepted on the wire and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomId {
    Number(i64),
    Text(String),
}

impl From<i32> for RoomId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<i64> for RoomId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A named location inside a property or changeover.
///
/// The service owns rooms; the field only ever holds read-only copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Canonical display name, in the casing the service stored.
    pub name: String,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_and_text_ids() {
        let rooms: Vec<Room> = serde_json::from_str(
            r#"[
                {"id": 7, "name": "Kitchen", "property_id": 3},
                {"id": "9d2f-11", "name": "Garage"}
            ]"#,
        )
        .unwrap();
        assert_eq!(rooms[0], Room::new(7, "Kitchen"));
        assert_eq!(rooms[1].id, RoomId::Text("9d2f-11".to_string()));
        assert_eq!(rooms[1].name, "Garage");
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let parsed = serde_json::from_str::<Room>(r#"{"id": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId::from(12).to_string(), "12");
        assert_eq!(RoomId::from("abc").to_string(), "abc");
    }
}

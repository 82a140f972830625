//! Matching typed input against the known rooms.
//!
//! Input is trimmed, then compared against room names ignoring case. The first
//! room in list order wins, and its stored name becomes the canonical value.

use crate::room::Room;

/// What a committed input refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Nothing left after trimming.
    Empty,
    /// An existing room, matched ignoring case.
    Existing(&'a Room),
    /// A name no known room carries; holds the trimmed input.
    New(String),
}

/// Trim raw input, returning `None` when nothing is left.
pub fn normalize_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Case-insensitive equality on names.
pub fn names_match(stored: &str, input: &str) -> bool {
    stored.to_lowercase() == input.to_lowercase()
}

/// First room whose name matches `name` ignoring case.
pub fn find_room<'a>(rooms: &'a [Room], name: &str) -> Option<&'a Room> {
    rooms.iter().find(|room| names_match(&room.name, name))
}

/// Resolve raw field input against `rooms`.
pub fn resolve<'a>(rooms: &'a [Room], raw: &str) -> Resolution<'a> {
    let Some(name) = normalize_input(raw) else {
        return Resolution::Empty;
    };
    match find_room(rooms, name) {
        Some(room) => Resolution::Existing(room),
        None => Resolution::New(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomId;

    fn rooms() -> Vec<Room> {
        vec![
            Room::new(1, "Kitchen"),
            Room::new(2, "Garage"),
            Room::new(3, "Master Bedroom"),
        ]
    }

    #[test]
    fn test_case_variants_resolve_to_stored_name() {
        let rooms = rooms();
        for input in ["kitchen", "KITCHEN", "kItChEn", "  Kitchen\t"] {
            match resolve(&rooms, input) {
                Resolution::Existing(room) => assert_eq!(room.name, "Kitchen"),
                other => panic!("{input:?} resolved to {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_name_is_new_and_trimmed() {
        let rooms = rooms();
        assert_eq!(resolve(&rooms, "  Shed "), Resolution::New("Shed".to_string()));
    }

    #[test]
    fn test_blank_input_is_empty() {
        let rooms = rooms();
        assert_eq!(resolve(&rooms, ""), Resolution::Empty);
        assert_eq!(resolve(&rooms, " \t\n "), Resolution::Empty);
    }

    #[test]
    fn test_first_match_in_list_order_wins() {
        let rooms = vec![Room::new(1, "Loft"), Room::new(2, "LOFT")];
        match resolve(&rooms, "loft") {
            Resolution::Existing(room) => assert_eq!(room.id, RoomId::from(1)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_inner_whitespace_is_significant() {
        let rooms = rooms();
        assert_eq!(
            resolve(&rooms, "master  bedroom"),
            Resolution::New("master  bedroom".to_string())
        );
        assert!(find_room(&rooms, "master bedroom").is_some());
    }

    #[test]
    fn test_unicode_case_folding() {
        let rooms = vec![Room::new(1, "Salle à manger"), Room::new(2, "Église")];
        assert!(find_room(&rooms, "SALLE À MANGER").is_some());
        assert!(find_room(&rooms, "église").is_some());
    }

    #[test]
    fn test_empty_room_list_never_matches() {
        assert_eq!(resolve(&[], "Kitchen"), Resolution::New("Kitchen".to_string()));
    }
}

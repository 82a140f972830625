//! Owner scope of a room list.
//!
//! Rooms are scoped either to a property or to a changeover. Callers that know
//! which kind of identifier they hold build the variant directly; raw strings
//! coming from older pages go through [`OwnerId::infer`], which keys off the
//! separator found in changeover identifiers.

use crate::error::RoomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character that only appears in changeover identifiers.
pub const CHANGEOVER_SEPARATOR: char = '-';

/// The property or changeover a room list belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum OwnerId {
    /// A plain property identifier.
    Property(String),
    /// A changeover identifier (dash-separated).
    Changeover(String),
}

impl OwnerId {
    pub fn property(id: impl Into<String>) -> Self {
        Self::Property(id.into())
    }

    pub fn changeover(id: impl Into<String>) -> Self {
        Self::Changeover(id.into())
    }

    /// Classify a raw identifier: anything containing
    /// [`CHANGEOVER_SEPARATOR`] is a changeover, everything else a property.
    pub fn infer(raw: &str) -> Self {
        if raw.contains(CHANGEOVER_SEPARATOR) {
            Self::Changeover(raw.to_string())
        } else {
            Self::Property(raw.to_string())
        }
    }

    /// The bare identifier, without its kind.
    pub fn id(&self) -> &str {
        match self {
            Self::Property(id) | Self::Changeover(id) => id,
        }
    }

    pub fn is_changeover(&self) -> bool {
        matches!(self, Self::Changeover(_))
    }

    /// Path segment used by the room service for this kind of owner.
    pub fn scope(&self) -> &'static str {
        match self {
            Self::Property(_) => "properties",
            Self::Changeover(_) => "changeovers",
        }
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(id) => write!(f, "property {id}"),
            Self::Changeover(id) => write!(f, "changeover {id}"),
        }
    }
}

impl FromStr for OwnerId {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(RoomError::InvalidOwner(s.to_string()));
        }
        Ok(Self::infer(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_changeover_from_separator() {
        let owner = OwnerId::infer("3b1e2c4d-9f00-4c1a-a7de-0c2b9e51f7aa");
        assert!(owner.is_changeover());
        assert_eq!(owner.scope(), "changeovers");

        let owner = OwnerId::infer("a-");
        assert!(owner.is_changeover());
    }

    #[test]
    fn test_infer_property_without_separator() {
        for raw in ["42", "beach_house", "", "A B"] {
            let owner = OwnerId::infer(raw);
            assert!(!owner.is_changeover(), "{raw:?} should be a property");
            assert_eq!(owner.id(), raw);
        }
    }

    #[test]
    fn test_explicit_variants_ignore_separator() {
        assert!(!OwnerId::property("12-34").is_changeover());
        assert!(OwnerId::changeover("1234").is_changeover());
    }

    #[test]
    fn test_from_str_trims_and_rejects_empty() {
        let owner: OwnerId = "  17 ".parse().unwrap();
        assert_eq!(owner, OwnerId::property("17"));

        let err = "   ".parse::<OwnerId>().unwrap_err();
        assert!(matches!(err, RoomError::InvalidOwner(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(OwnerId::property("9").to_string(), "property 9");
        assert_eq!(OwnerId::changeover("a-b").to_string(), "changeover a-b");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level document collections
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    Lobbies,
    Games,
}

/// Address of a single document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    pub collection: Collection,
    pub id: String,
}

impl DocumentKey {
    pub fn new(collection: Collection, id: impl Into<String>) -> Self {
        Self {
            collection,
            id: id.into(),
        }
    }

    /// Parses the `collection/id` display form
    pub fn parse(raw: &str) -> Option<Self> {
        let (collection, id) = raw.split_once('/')?;
        if id.is_empty() {
            return None;
        }
        let collection = Collection::from_str(collection).ok()?;
        Some(Self::new(collection, id))
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// A stored document body together with its write version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedDocument {
    pub version: u64,
    pub body: serde_json::Value,
}

/// Result of a conditional write
#[derive(Debug, Clone, PartialEq)]
pub enum CasOutcome {
    /// The write was applied, returns the stored document
    Committed(VersionedDocument),
    /// Another writer got there first
    Conflict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display_round_trips() {
        let key = DocumentKey::new(Collection::Games, "spyfall_abc");

        assert_eq!(key.to_string(), "games/spyfall_abc");
        assert_eq!(DocumentKey::parse("games/spyfall_abc"), Some(key));
    }

    #[test]
    fn test_key_parse_rejects_garbage() {
        assert_eq!(DocumentKey::parse("games"), None);
        assert_eq!(DocumentKey::parse("games/"), None);
        assert_eq!(DocumentKey::parse("rooms/abc"), None);
    }
}

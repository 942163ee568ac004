use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::shared::AppError;
use crate::store::{DocumentKey, VersionedDocument};

/// Whole-document snapshot published after every committed change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChanged {
    pub key: DocumentKey,
    pub version: u64,
    /// `None` once the document has been deleted
    pub body: Option<serde_json::Value>,
}

impl DocumentChanged {
    pub fn updated(key: DocumentKey, document: &VersionedDocument) -> Self {
        Self {
            key,
            version: document.version,
            body: Some(document.body.clone()),
        }
    }

    pub fn deleted(key: DocumentKey, version: u64) -> Self {
        Self {
            key,
            version,
            body: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.body.is_none()
    }

    /// Decodes the snapshot into a typed model
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, AppError> {
        match &self.body {
            Some(body) => Ok(Some(serde_json::from_value(body.clone())?)),
            None => Ok(None),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use super::catalog::BUILTIN_LOCATIONS;
use crate::game::SPY_ROLE;
use crate::shuffle::Shuffler;

#[derive(Debug, Error)]
pub enum RoleBookError {
    #[error("Location names must not be blank")]
    BlankName,

    #[error("Duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("Location {0} has a blank role")]
    BlankRole(String),

    #[error("Location {0} lists the reserved spy role")]
    ReservedRole(String),

    #[error("Location {location} lists role {role} more than once")]
    DuplicateRole { location: String, role: String },

    #[error("Failed to read role book: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse role book: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Language the built-in catalog is played in
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Th,
}

/// A place a round can be set in, together with its non-spy roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub roles: Vec<String>,
    /// The same place in the other catalog language, for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
}

/// Catalog of locations; read-only once built
#[derive(Debug, Clone, Default)]
pub struct RoleBook {
    locations: Vec<Location>,
}

impl RoleBook {
    pub fn new(locations: Vec<Location>) -> Result<Self, RoleBookError> {
        let mut seen = HashSet::new();
        for location in &locations {
            if location.name.trim().is_empty() {
                return Err(RoleBookError::BlankName);
            }
            if !seen.insert(location.name.as_str()) {
                return Err(RoleBookError::DuplicateLocation(location.name.clone()));
            }
            validate_roles(location)?;
        }

        Ok(Self { locations })
    }

    /// The classic thirty-location catalog in English
    pub fn builtin() -> Self {
        Self::builtin_in(Language::En)
    }

    /// The classic catalog with names and roles in `language`
    pub fn builtin_in(language: Language) -> Self {
        let locations = BUILTIN_LOCATIONS
            .iter()
            .map(|entry| {
                let (name, roles, other) = match language {
                    Language::En => (entry.name_en, entry.roles_en, entry.name_th),
                    Language::Th => (entry.name_th, entry.roles_th, entry.name_en),
                };
                Location {
                    name: name.to_string(),
                    roles: roles.iter().map(|role| role.to_string()).collect(),
                    localized_name: Some(other.to_string()),
                }
            })
            .collect();

        Self { locations }
    }

    /// Parses `[{"name": ..., "roles": [...], "localizedName": ...}]`, the last field optional
    pub fn from_json(raw: &str) -> Result<Self, RoleBookError> {
        let locations: Vec<Location> = serde_json::from_str(raw)?;
        Self::new(locations)
    }

    pub fn load(path: &Path) -> Result<Self, RoleBookError> {
        let raw = std::fs::read_to_string(path)?;
        let book = Self::from_json(&raw)?;
        info!(path = %path.display(), locations = book.len(), "Loaded role book");
        Ok(book)
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location_names(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.name.clone()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Uniformly picks one location, `None` when the catalog is empty
    pub fn pick(&self, shuffler: &Shuffler) -> Option<&Location> {
        shuffler
            .pick_index(self.locations.len())
            .and_then(|index| self.locations.get(index))
    }
}

/// Roles of one location are distinct, non-blank and never the spy role
fn validate_roles(location: &Location) -> Result<(), RoleBookError> {
    let mut roles = HashSet::new();
    for role in &location.roles {
        let role = role.trim();
        if role.is_empty() {
            return Err(RoleBookError::BlankRole(location.name.clone()));
        }
        if role.eq_ignore_ascii_case(SPY_ROLE) {
            return Err(RoleBookError::ReservedRole(location.name.clone()));
        }
        if !roles.insert(role) {
            return Err(RoleBookError::DuplicateRole {
                location: location.name.clone(),
                role: role.to_string(),
            });
        }
    }
    Ok(())
}

// Location catalog
//
// Each location carries the non-spy roles handed out when a round is
// assembled there.

// Public API - what other modules can use
pub use models::{Language, Location, RoleBook, RoleBookError};

// Internal modules
mod catalog;
mod models;

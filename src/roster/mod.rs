pub mod types;
pub mod builtin;
pub mod loader;
pub mod validation;

// Re-export the main API for easier access
pub use types::{ClassRecord, StudentRecord, DirectorySettings, Roster};
pub use builtin::builtin_roster;
pub use loader::{RosterLoader, RosterFormat, load_roster};
pub use validation::validate_roster;

pub mod roster;
pub mod ldif;
pub mod writer;
pub mod report;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export main types and functions for easier access
pub use roster::types::{ClassRecord, StudentRecord, DirectorySettings, Roster};
pub use roster::{builtin_roster, load_roster};
pub use ldif::{derive_username, transliterate, render_class_file, UserEntry, ClassHeader};
pub use writer::{ClassFileWriter, ClassFileReport, GenerationSummary, generate_all, generate_all_with};
pub use report::ConsoleReport;

// Re-export utility functions
pub use utils::file_utils;

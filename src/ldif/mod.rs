pub mod record;
pub mod transliterate;
pub mod username;
pub mod entry;
pub mod unit;

use crate::roster::{ClassRecord, DirectorySettings};

// Re-export the main API for easier access
pub use record::{LdifRecord, render_records};
pub use transliterate::transliterate;
pub use username::{derive_username, find_collisions, DerivedIdentity, UsernameCollision};
pub use entry::{UserEntry, sanitize_group_suffix};
pub use unit::ClassHeader;

/// Separator between student entries: each entry opens with a blank line
/// and entries are joined with another one, so two blank lines sit between
/// consecutive students and one between the OU entry and the first student.
const ENTRY_SEPARATOR: &str = "\n";

/// Records of the file header: preamble and OU entry
pub fn header_records(class: &ClassRecord, settings: &DirectorySettings) -> Vec<LdifRecord> {
    let header = ClassHeader::new(class, settings);
    vec![header.preamble(), header.unit_record()]
}

/// Records of the student entries in roster order
pub fn student_records(class: &ClassRecord, settings: &DirectorySettings) -> Vec<LdifRecord> {
    class.students.iter()
        .map(|student| UserEntry::new(student, class, settings).to_record())
        .collect()
}

/// Render the complete LDIF document for a class
pub fn render_class_file(class: &ClassRecord, settings: &DirectorySettings) -> String {
    let mut out = render_records(&header_records(class, settings));

    let entries = student_records(class, settings).iter()
        .map(|record| format!("\n{}", record.render()))
        .collect::<Vec<_>>();
    out.push_str(&entries.join(ENTRY_SEPARATOR));
    out
}

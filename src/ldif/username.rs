use std::collections::BTreeMap;

use log::trace;

use crate::roster::{ClassRecord, DirectorySettings, Roster, StudentRecord};
use super::transliterate::transliterate;

/// Build the login handle for a student: `first.last`.
///
/// Each half is transliterated, lowercased and stripped of everything but
/// ASCII letters, digits and hyphens, so "Wiktor Marek" becomes
/// "wiktormarek". Uniqueness is not checked here, see [`find_collisions`].
pub fn derive_username(first_name: &str, last_name: &str) -> String {
    format!("{}.{}", username_part(first_name), username_part(last_name))
}

fn username_part(name: &str) -> String {
    transliterate(name)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Identity attributes derived from a student and their class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentity {
    /// Login handle, used as CN and sAMAccountName
    pub username: String,

    /// "First Last (CODE)"
    pub display_name: String,

    /// Student mail address
    pub mail: String,

    /// Modern login identifier
    pub user_principal_name: String,
}

impl DerivedIdentity {
    /// Derive the identity of a student within a class
    pub fn derive(student: &StudentRecord, class: &ClassRecord, settings: &DirectorySettings) -> Self {
        let username = derive_username(&student.first_name, &student.last_name);
        trace!("Derived username {} for {}", username, student.full_name());

        Self {
            display_name: format!("{} ({})", student.full_name(), class.code),
            mail: format!("{}@{}", username, settings.mail_domain),
            user_principal_name: format!("{}@{}", username, settings.principal_domain),
            username,
        }
    }
}

/// Students sharing one derived username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameCollision {
    /// The shared username
    pub username: String,

    /// (class code, full name) of every student that maps to it
    pub students: Vec<(String, String)>,
}

impl UsernameCollision {
    /// "Name (CODE), Name (CODE)" listing of the students involved
    pub fn owners(&self) -> String {
        self.students.iter()
            .map(|(code, name)| format!("{} ({})", name, code))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Find usernames shared by more than one student across the whole roster.
///
/// Results are sorted by username, students within a collision keep roster
/// order.
pub fn find_collisions(roster: &Roster) -> Vec<UsernameCollision> {
    let mut owners: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();

    for class in &roster.classes {
        for student in &class.students {
            owners.entry(derive_username(&student.first_name, &student.last_name))
                .or_default()
                .push((class.code.clone(), student.full_name()));
        }
    }

    owners.into_iter()
        .filter(|(_, students)| students.len() > 1)
        .map(|(username, students)| UsernameCollision { username, students })
        .collect()
}

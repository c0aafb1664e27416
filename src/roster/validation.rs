use std::collections::HashSet;

use anyhow::{Result, bail, ensure};
use log::debug;

use crate::ldif::derive_username;
use super::types::{ClassRecord, DirectorySettings, Roster};

/// Check that a roster can be turned into files and directory entries.
///
/// Class codes end up in file names, so they are restricted to ASCII
/// alphanumerics and hyphens. Codes and OU names must be unique. No field may
/// contain control characters, since every value is written on a single LDIF
/// line. Every student needs a first and last name that each leave something
/// in the derived username.
pub fn validate_roster(roster: &Roster) -> Result<()> {
    validate_settings(&roster.settings)?;

    let mut codes = HashSet::new();
    let mut units = HashSet::new();

    for class in &roster.classes {
        validate_class(class)?;

        if !codes.insert(class.code.to_lowercase()) {
            bail!("Duplicate class code {}", class.code);
        }
        if !units.insert(class.ou.as_str()) {
            bail!("Duplicate organizational unit {} (class {})", class.ou, class.code);
        }
    }

    debug!("Roster with {} classes passed validation", roster.classes.len());
    Ok(())
}

/// Reject values that would break out of their LDIF line
fn ensure_single_line(value: &str, field: &str, owner: &str) -> Result<()> {
    if let Some(c) = value.chars().find(|c| c.is_control()) {
        bail!("{} of {} contains control character {:?}", field, owner, c);
    }
    Ok(())
}

fn validate_settings(settings: &DirectorySettings) -> Result<()> {
    let fields = [
        ("base_dn", &settings.base_dn),
        ("mail_domain", &settings.mail_domain),
        ("principal_domain", &settings.principal_domain),
        ("file_server", &settings.file_server),
        ("password_suffix", &settings.password_suffix),
        ("school_year", &settings.school_year),
        ("school_name", &settings.school_name),
    ];
    for (field, value) in fields {
        ensure_single_line(value, field, "settings")?;
    }
    Ok(())
}

fn validate_class(class: &ClassRecord) -> Result<()> {
    let owner = format!("class {}", class.code);
    ensure_single_line(&class.ou, "ou", &owner)?;
    ensure_single_line(&class.specialization, "specialization", &owner)?;
    ensure_single_line(&class.teacher, "teacher", &owner)?;

    ensure!(!class.code.trim().is_empty(), "Class with organizational unit '{}' has an empty code", class.ou);
    ensure!(
        class.code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
        "Class code '{}' may only contain ASCII letters, digits and hyphens",
        class.code
    );
    ensure!(!class.ou.trim().is_empty(), "Class {} has an empty organizational unit", class.code);

    for (index, student) in class.students.iter().enumerate() {
        if student.first_name.trim().is_empty() || student.last_name.trim().is_empty() {
            bail!("Student #{} in class {} has a blank first or last name", index + 1, class.code);
        }

        let student_owner = format!("student #{} in class {}", index + 1, class.code);
        ensure_single_line(&student.first_name, "first_name", &student_owner)?;
        ensure_single_line(&student.last_name, "last_name", &student_owner)?;

        let username = derive_username(&student.first_name, &student.last_name);
        if username.starts_with('.') || username.ends_with('.') {
            bail!(
                "Student #{} in class {} ({}) gives the incomplete username '{}'",
                index + 1, class.code, student.full_name(), username
            );
        }
    }

    Ok(())
}

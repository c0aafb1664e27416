use crate::roster::{ClassRecord, DirectorySettings, StudentRecord};
use super::record::{self, LdifRecord};
use super::username::DerivedIdentity;

/// Drive letter the home directory is mapped to
pub const HOME_DRIVE_LETTER: &str = "H:";

/// Logon script assigned to every student
pub const LOGON_SCRIPT: &str = "logon-student.bat";

/// NORMAL_ACCOUNT, enabled
pub const NORMAL_ACCOUNT: u32 = 512;

/// CN of the group every student belongs to
pub const STUDENTS_GROUP: &str = "Students";

/// Prefix of the per-specialization group CN
pub const SPECIALIZATION_GROUP_PREFIX: &str = "Specialization-";

/// Turn a specialization label into a group name suffix.
///
/// Spaces and slashes become hyphens, nothing else changes.
pub fn sanitize_group_suffix(specialization: &str) -> String {
    specialization.replace([' ', '/'], "-")
}

/// Directory entry of a single student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub first_name: String,
    pub last_name: String,
    pub identity: DerivedIdentity,
    pub class_code: String,
    pub class_ou: String,
    pub specialization: String,
    pub dn: String,
    pub home_directory: String,
    pub member_of: Vec<String>,
}

impl UserEntry {
    /// Build the entry for a student of the given class
    pub fn new(student: &StudentRecord, class: &ClassRecord, settings: &DirectorySettings) -> Self {
        let identity = DerivedIdentity::derive(student, class, settings);
        let groups_dn = settings.groups_dn();

        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            dn: format!("CN={},{}", identity.username, settings.class_ou_dn(&class.ou)),
            home_directory: format!(
                "\\\\{}\\home\\students\\{}",
                settings.file_server, identity.username
            ),
            member_of: vec![
                format!("CN={},{}", STUDENTS_GROUP, groups_dn),
                format!("CN={},{}", class.ou, groups_dn),
                format!(
                    "CN={}{},{}",
                    SPECIALIZATION_GROUP_PREFIX,
                    sanitize_group_suffix(&class.specialization),
                    groups_dn
                ),
            ],
            identity,
            class_code: class.code.clone(),
            class_ou: class.ou.clone(),
            specialization: class.specialization.clone(),
        }
    }

    /// Convert into an LDIF record with the attributes in output order
    pub fn to_record(&self) -> LdifRecord {
        let username = &self.identity.username;

        let ldif = LdifRecord::new()
            .comment(format!("Uczeń: {} {}", self.first_name, self.last_name))
            .attribute(record::DN, self.dn.as_str())
            .attribute(record::OBJECT_CLASS, record::USER_CLASS)
            .attribute(record::CN, username.as_str())
            .attribute(record::SAM_ACCOUNT_NAME, username.as_str())
            .attribute(record::GIVEN_NAME, self.first_name.as_str())
            .attribute(record::SURNAME, self.last_name.as_str())
            .attribute(record::DISPLAY_NAME, self.identity.display_name.as_str())
            .attribute(record::MAIL, self.identity.mail.as_str())
            .attribute(record::USER_PRINCIPAL_NAME, self.identity.user_principal_name.as_str())
            .attribute(record::DESCRIPTION, format!("Uczeń {} - {}", self.class_code, self.specialization))
            .attribute(record::HOME_DIRECTORY, self.home_directory.as_str())
            .attribute(record::HOME_DRIVE, HOME_DRIVE_LETTER)
            .attribute(record::SCRIPT_PATH, LOGON_SCRIPT)
            .attribute(record::USER_ACCOUNT_CONTROL, NORMAL_ACCOUNT.to_string());

        self.member_of.iter()
            .fold(ldif, |ldif, group| ldif.attribute(record::MEMBER_OF, group.as_str()))
    }

    /// Render the entry as LDIF text
    pub fn render(&self) -> String {
        self.to_record().render()
    }
}

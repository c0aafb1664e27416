use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

/// A single student as listed in a class roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentRecord {
    /// First name, possibly compound ("Wiktor Marek")
    pub first_name: String,

    /// Last name, possibly with accented characters
    pub last_name: String,
}

impl StudentRecord {
    /// Create a new student record
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Full name as written in the roster
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A class (oddział) and its students
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassRecord {
    /// Class code, e.g. "1AT"
    pub code: String,

    /// Name of the organizational unit for this class, e.g. "Class-1AT"
    pub ou: String,

    /// Specialization label, e.g. "technik mechatronik"
    pub specialization: String,

    /// Homeroom teacher label
    pub teacher: String,

    /// Students in roster order
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

impl ClassRecord {
    /// Number of students in the class
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Name of the LDIF file generated for this class
    pub fn file_name(&self) -> String {
        format!("class-{}.ldif", self.code.to_lowercase())
    }
}

/// Site constants embedded in every generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectorySettings {
    /// Domain components of the directory, e.g. "DC=ad,DC=zsel,DC=opole,DC=pl"
    pub base_dn: String,

    /// Domain used for student mail addresses
    pub mail_domain: String,

    /// Domain used for user principal names
    pub principal_domain: String,

    /// Host serving the home directories
    pub file_server: String,

    /// Appended to the class code to form the shared class password
    pub password_suffix: String,

    /// Date the roster was taken
    pub snapshot_date: NaiveDate,

    /// Year of study of the classes in the roster
    pub cohort_year: u32,

    /// School year shown in the operator report
    pub school_year: String,

    /// School name shown in the operator report
    pub school_name: String,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            base_dn: "DC=ad,DC=zsel,DC=opole,DC=pl".to_string(),
            mail_domain: "student.zsel.opole.pl".to_string(),
            principal_domain: "ad.zsel.opole.pl".to_string(),
            file_server: "nextcloud.zsel.opole.pl".to_string(),
            password_suffix: "2025".to_string(),
            snapshot_date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap_or_default(),
            cohort_year: 1,
            school_year: "2025/2026".to_string(),
            school_name: "ZSEL Opole".to_string(),
        }
    }
}

impl DirectorySettings {
    /// DN of the container holding all class OUs
    pub fn students_dn(&self) -> String {
        format!("OU=Students,{}", self.base_dn)
    }

    /// DN of the container holding all groups
    pub fn groups_dn(&self) -> String {
        format!("OU=Groups,{}", self.base_dn)
    }

    /// DN of a class organizational unit
    pub fn class_ou_dn(&self, class_ou: &str) -> String {
        format!("OU={},{}", class_ou, self.students_dn())
    }

    /// Shared password convention for a class
    pub fn shared_password(&self, class_code: &str) -> String {
        format!("{}{}", class_code, self.password_suffix)
    }
}

/// The complete input of a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    /// Site constants
    #[serde(default)]
    pub settings: DirectorySettings,

    /// Classes in generation order
    pub classes: Vec<ClassRecord>,
}

impl Roster {
    /// Create a new roster
    pub fn new(settings: DirectorySettings, classes: Vec<ClassRecord>) -> Self {
        Self { settings, classes }
    }

    /// Total number of students across all classes
    pub fn total_students(&self) -> usize {
        self.classes.iter().map(ClassRecord::student_count).sum()
    }

    /// Find a class by its code
    pub fn find_class(&self, code: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|class| class.code == code)
    }
}

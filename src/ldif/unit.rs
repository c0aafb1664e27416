use crate::roster::{ClassRecord, DirectorySettings};
use super::record::{self, LdifRecord};

/// File preamble and organizational unit entry of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    pub code: String,
    pub ou: String,
    pub ou_dn: String,
    pub specialization: String,
    pub teacher: String,
    pub student_count: usize,
    pub shared_password: String,
    /// Snapshot date as dd.mm.yyyy
    pub date: String,
    pub cohort_year: u32,
}

impl ClassHeader {
    pub fn new(class: &ClassRecord, settings: &DirectorySettings) -> Self {
        Self {
            code: class.code.clone(),
            ou: class.ou.clone(),
            ou_dn: settings.class_ou_dn(&class.ou),
            specialization: class.specialization.clone(),
            teacher: class.teacher.clone(),
            student_count: class.student_count(),
            shared_password: settings.shared_password(&class.code),
            date: settings.snapshot_date.format("%d.%m.%Y").to_string(),
            cohort_year: settings.cohort_year,
        }
    }

    /// Comment block opening the file
    pub fn preamble(&self) -> LdifRecord {
        LdifRecord::new()
            .comment(format!(
                "User AD - Oddział {} ({}, {} uczniów)",
                self.code, self.specialization, self.student_count
            ))
            .comment(format!("OU: {}", self.ou_dn))
            .comment(format!("Wychowawca: {}", self.teacher))
            .comment(format!("Hasło wspólne dla całego oddziału: {}", self.shared_password))
            .comment(format!("Data: {} - RZECZYWISTE DANE", self.date))
    }

    /// The organizational unit entry itself
    pub fn unit_record(&self) -> LdifRecord {
        LdifRecord::new()
            .comment(format!("Organizational Unit: {}", self.ou))
            .attribute(record::DN, self.ou_dn.as_str())
            .attribute(record::OBJECT_CLASS, record::ORGANIZATIONAL_UNIT_CLASS)
            .attribute(record::OU, self.ou.as_str())
            .attribute(record::DESCRIPTION, format!(
                "Oddział {} - {} (rok {}, {} uczniów)",
                self.code, self.specialization, self.cohort_year, self.student_count
            ))
    }
}

use std::path::PathBuf;

use crate::ldif::UsernameCollision;

/// Outcome of writing one class file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFileReport {
    /// Code of the class
    pub class_code: String,

    /// Name of the generated file
    pub file_name: String,

    /// Full path of the generated file
    pub path: PathBuf,

    /// Number of user entries in the file
    pub student_count: usize,

    /// Size of the file in bytes
    pub bytes_written: usize,
}

/// Statistics for a whole generator run
#[derive(Debug, Default, Clone)]
pub struct GenerationSummary {
    /// Directory the files were written to
    pub output_dir: PathBuf,

    /// One report per class, in roster order
    pub files: Vec<ClassFileReport>,

    /// Usernames shared by more than one student
    pub collisions: Vec<UsernameCollision>,
}

impl GenerationSummary {
    /// Create an empty summary for the given output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Number of class files written
    pub fn total_classes(&self) -> usize {
        self.files.len()
    }

    /// Number of user entries written across all files
    pub fn total_students(&self) -> usize {
        self.files.iter().map(|file| file.student_count).sum()
    }

    /// Number of bytes written across all files
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|file| file.bytes_written).sum()
    }
}

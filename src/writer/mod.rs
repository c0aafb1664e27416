mod stats;

use std::path::{Path, PathBuf};

use anyhow::{Result, Context};
use log::{info, debug, warn};

use crate::ldif::{self, find_collisions};
use crate::roster::{ClassRecord, DirectorySettings, Roster, validate_roster};
use crate::utils::file_utils;

// Re-export from submodules
pub use stats::{ClassFileReport, GenerationSummary};

/// Writes one LDIF file per class into an output directory
#[derive(Debug)]
pub struct ClassFileWriter {
    /// Directory receiving the class files
    output_dir: PathBuf,

    /// Site constants used while rendering
    settings: DirectorySettings,
}

impl ClassFileWriter {
    /// Create a new writer for the given output directory
    pub fn new(output_dir: impl AsRef<Path>, settings: DirectorySettings) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            settings,
        }
    }

    /// Create a new writer with the default directory settings
    pub fn with_defaults(output_dir: impl AsRef<Path>) -> Self {
        Self::new(output_dir, DirectorySettings::default())
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file generated for a class
    pub fn output_path(&self, class: &ClassRecord) -> PathBuf {
        self.output_dir.join(class.file_name())
    }

    /// Render a class and write it to its file, replacing any previous version
    pub fn write_class(&self, class: &ClassRecord) -> Result<ClassFileReport> {
        file_utils::ensure_dir_exists(&self.output_dir)?;

        let path = self.output_path(class);
        debug!("Rendering class {} ({} students)", class.code, class.student_count());

        let content = ldif::render_class_file(class, &self.settings);
        file_utils::write_string_atomically(&path, &content)?;

        info!("Wrote {} ({} bytes)", path.display(), content.len());

        Ok(ClassFileReport {
            class_code: class.code.clone(),
            file_name: class.file_name(),
            path,
            student_count: class.student_count(),
            bytes_written: content.len(),
        })
    }
}

/// Generate the files for every class of a roster
pub fn generate_all(roster: &Roster, output_dir: impl AsRef<Path>) -> Result<GenerationSummary> {
    generate_all_with(roster, output_dir, |_| Ok(()))
}

/// Generate the files for every class of a roster, in roster order.
///
/// `on_written` is called after each file is in place. The run stops at the
/// first class that cannot be written; files already written stay.
pub fn generate_all_with<F>(
    roster: &Roster,
    output_dir: impl AsRef<Path>,
    mut on_written: F,
) -> Result<GenerationSummary>
where
    F: FnMut(&ClassFileReport) -> Result<()>,
{
    let output_dir = output_dir.as_ref();
    validate_roster(roster)?;

    info!(
        "Generating {} classes ({} students) into {}",
        roster.classes.len(),
        roster.total_students(),
        output_dir.display()
    );

    let mut summary = GenerationSummary::new(output_dir);
    summary.collisions = find_collisions(roster);
    for collision in &summary.collisions {
        warn!("Username {} is shared by {}", collision.username, collision.owners());
    }

    let writer = ClassFileWriter::new(output_dir, roster.settings.clone());
    for class in &roster.classes {
        let report = writer.write_class(class)
            .with_context(|| format!("Failed to generate class {}", class.code))?;
        on_written(&report)?;
        summary.files.push(report);
    }

    info!(
        "Generated {} files with {} students ({} bytes)",
        summary.total_classes(),
        summary.total_students(),
        summary.total_bytes()
    );

    Ok(summary)
}

use std::path::Path;
use std::fs;
use std::io::Write;
use anyhow::{Result, Context};
use log::{debug, trace};
use tempfile::NamedTempFile;

/// Mode given to generated files, readable by the import tooling
#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o644;

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Check if a file has a specific extension
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    let path = path.as_ref();
    if let Some(ext) = path.extension() {
        if let Some(ext_str) = ext.to_str() {
            return ext_str.eq_ignore_ascii_case(extension);
        }
    }
    false
}

/// Check if a file has one of the specified extensions
pub fn has_any_extension(path: impl AsRef<Path>, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| has_extension(path.as_ref(), ext))
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Write a string to a file, replacing it in one step.
///
/// The content goes to a temporary file next to the target which is then
/// renamed over it. On failure the temporary file is removed and the target
/// is left as it was. On Unix the result is `rw-r--r--`, like a plain
/// `fs::write` under the usual umask, rather than the owner-only mode
/// temporary files are created with.
pub fn write_string_atomically(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    ensure_dir_exists(parent)?;

    let mut temp_file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    trace!("Writing {} bytes to {}", content.len(), temp_file.path().display());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file.as_file().set_permissions(fs::Permissions::from_mode(OUTPUT_FILE_MODE))
            .with_context(|| format!("Failed to set permissions on {}", temp_file.path().display()))?;
    }

    temp_file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file {}", path.display()))?;
    temp_file.as_file().sync_all()
        .with_context(|| format!("Failed to flush file {}", path.display()))?;

    temp_file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write file {}", path.display()))?;

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{Result, Context, bail};
use log::{info, debug};

use crate::utils::file_utils;
use super::types::Roster;
use super::validation::validate_roster;

/// Supported roster file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Toml,
    Yaml,
    Json,
}

impl RosterFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if file_utils::has_extension(path, "toml") {
            Ok(Self::Toml)
        } else if file_utils::has_any_extension(path, &["yaml", "yml"]) {
            Ok(Self::Yaml)
        } else if file_utils::has_extension(path, "json") {
            Ok(Self::Json)
        } else {
            bail!(
                "Unsupported roster file {}: expected a .toml, .yaml, .yml or .json extension",
                path.display()
            )
        }
    }

    /// Parse roster content in this format
    pub fn parse(self, content: &str) -> Result<Roster> {
        let roster: Roster = match self {
            Self::Toml => toml::from_str(content).context("Invalid TOML roster")?,
            Self::Yaml => serde_yaml::from_str(content).context("Invalid YAML roster")?,
            Self::Json => serde_json::from_str(content).context("Invalid JSON roster")?,
        };
        Ok(roster)
    }
}

/// Loads a roster from a file on disk
#[derive(Debug)]
pub struct RosterLoader {
    /// Path to the roster file
    path: PathBuf,
}

impl RosterLoader {
    /// Create a new loader for the given roster file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read, parse and validate the roster
    pub fn load(&self) -> Result<Roster> {
        let path = &self.path;
        let format = RosterFormat::from_path(path)?;
        debug!("Loading {:?} roster from {}", format, path.display());

        let content = file_utils::read_file_to_string(path)?;
        let roster = format.parse(&content)
            .with_context(|| format!("Failed to parse roster file {}", path.display()))?;

        validate_roster(&roster)
            .with_context(|| format!("Roster file {} failed validation", path.display()))?;

        info!(
            "Loaded roster with {} classes ({} students) from {}",
            roster.classes.len(),
            roster.total_students(),
            path.display()
        );
        Ok(roster)
    }

    /// Get the path to the roster file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Load and validate a roster file
pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster> {
    RosterLoader::new(path).load()
}

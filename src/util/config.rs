//! Project configuration.
//!
//! An optional `Musher.toml` at the project root carries the package
//! version (compiled into the native library as `VERSION_INFO`) and
//! build-path overrides. Every field has a default, so a missing file
//! is fine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the optional project configuration file.
pub const CONFIG_FILE: &str = "Musher.toml";

/// Musher project configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MusherConfig {
    pub package: PackageSection,
    pub build: BuildSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackageSection {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// CMake source root (defaults to the project root).
    pub source_dir: Option<PathBuf>,

    /// Where the built library lands (defaults to the project root).
    pub output_dir: Option<PathBuf>,
}

impl Default for PackageSection {
    fn default() -> Self {
        PackageSection {
            name: "musher".to_string(),
            version: "0.1".to_string(),
        }
    }
}

impl Default for MusherConfig {
    fn default() -> Self {
        MusherConfig {
            package: PackageSection::default(),
            build: BuildSection::default(),
        }
    }
}

impl MusherConfig {
    /// Load `Musher.toml` from the project root, falling back to
    /// defaults when the file is absent.
    pub fn load(root: &Path) -> Result<MusherConfig> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE);
            return Ok(MusherConfig::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn source_dir(&self, root: &Path) -> PathBuf {
        match &self.build.source_dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }

    pub fn output_dir(&self, root: &Path) -> PathBuf {
        match &self.build.output_dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }
}

//! Filesystem utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Capability for checking path existence.
///
/// Compiler selection branches on a live filesystem probe; routing the
/// check through this trait keeps that logic deterministic under test.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default)]
pub struct RealFileProbe;

impl FileProbe for RealFileProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

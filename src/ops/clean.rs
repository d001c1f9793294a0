//! Implementation of `musher-build clean`.
//!
//! Best-effort, order-independent removal of everything the build and
//! test phases generate. Absence is not an error, so clean is safe to
//! invoke repeatedly and regardless of prior state.

use std::fs;
use std::path::{Path, PathBuf};

/// Generated directories, relative to the project root.
const ARTIFACT_DIRS: [&str; 9] = [
    "build",
    "dist",
    "musher.egg-info",
    ".eggs",
    ".pytest_cache",
    ".tox",
    "Release",
    "Debug",
    "test_bin",
];

/// Generated file patterns, relative to the project root.
const ARTIFACT_GLOBS: [&str; 7] = [
    "*.so", "*.dylib", "*.pyd", "*.dll", "*.exe", "*.exp", "*.lib",
];

/// What a clean run actually removed, for observability only.
#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
}

/// Enumerate the artifact set rooted at `root`.
///
/// Recomputed fresh each invocation; glob patterns expand against the
/// current filesystem state.
fn artifact_set(root: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = ARTIFACT_DIRS.iter().map(|d| root.join(d)).collect();

    for pattern in ARTIFACT_GLOBS {
        let full = root.join(pattern);
        let Ok(matches) = glob::glob(&full.to_string_lossy()) else {
            continue;
        };
        entries.extend(matches.flatten());
    }

    entries
}

/// Remove all build-generated artifacts under `root`.
///
/// Each entry is tried as a directory first, then as a file; entries
/// that cannot be removed are skipped. Never fails.
pub fn clean(root: &Path) -> CleanReport {
    let mut report = CleanReport::default();

    for entry in artifact_set(root) {
        if fs::remove_dir_all(&entry).is_ok() || fs::remove_file(&entry).is_ok() {
            report.removed.push(entry);
        } else {
            tracing::debug!("skipped {}", entry.display());
        }
    }

    report
}

//! C++ compiler selection.
//!
//! When the ambient toolchain compiles with plain `g++` and a known-good
//! versioned GCC is installed, the build pins that versioned binary via
//! `CMAKE_CXX_COMPILER`. Otherwise the ambient default is left alone.

use std::path::{Path, PathBuf};

use crate::util::fs::FileProbe;

/// The GNU C++ driver name that triggers the version pin.
const GNU_CXX: &str = "g++";

/// Preferred versioned compiler, used when present on disk.
const PREFERRED_GXX: &str = "/usr/bin/g++-8";

/// Compiler override decision for one build invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerChoice {
    pub override_path: Option<PathBuf>,
}

impl CompilerChoice {
    pub fn none() -> CompilerChoice {
        CompilerChoice::default()
    }
}

/// Decide whether to override the C++ compiler.
///
/// Returns an override iff the ambient default is the plain GNU driver
/// and the preferred versioned binary exists. The only side effect is a
/// filesystem existence check through `probe`.
pub fn select_cxx(default_cxx: &str, probe: &dyn FileProbe) -> CompilerChoice {
    if default_cxx == GNU_CXX && probe.exists(Path::new(PREFERRED_GXX)) {
        tracing::debug!("pinning C++ compiler to {}", PREFERRED_GXX);
        return CompilerChoice {
            override_path: Some(PathBuf::from(PREFERRED_GXX)),
        };
    }

    CompilerChoice::none()
}

/// Read the ambient default C++ compiler name from the environment.
///
/// Empty when `CXX` is unset; the build then uses whatever CMake
/// resolves on its own.
pub fn default_cxx_from_env() -> String {
    std::env::var("CXX").unwrap_or_default()
}

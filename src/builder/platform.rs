//! Host platform probing.

/// Operating system family, as far as the build orchestration cares.
///
/// Windows needs a mode-segmented test binary layout, an `.exe` suffix,
/// and per-configuration CMake output variables; every other OS shares
/// one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsKind {
    Windows,
    Unix,
}

/// Host platform information, computed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: OsKind,
    pub pointer_width: u32,
}

impl Platform {
    /// Probe the host. Pure query, no side effects.
    pub fn probe() -> Platform {
        let os = if cfg!(target_os = "windows") {
            OsKind::Windows
        } else {
            OsKind::Unix
        };

        Platform {
            os,
            pointer_width: usize::BITS,
        }
    }

    pub fn is_windows(&self) -> bool {
        self.os == OsKind::Windows
    }

    /// Whether the build should request a 64-bit target architecture.
    pub fn is_64bit(&self) -> bool {
        self.pointer_width == 64
    }
}

//! The two-phase CMake driver: configure, then build.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use crate::builder::configure::BuildPlan;
use crate::builder::errors::BuildError;
use crate::util::fs::ensure_dir;
use crate::util::process::{find_cmake, ProcessBuilder, ProcessRunner};

/// Minimum cmake version required by the Visual Studio generator paths.
const MIN_WINDOWS_VERSION: (u64, u64, u64) = (3, 1, 0);

/// Drives cmake through its configure and build phases.
///
/// Both phases run synchronously with the build directory as the
/// working directory; the build phase is never attempted when the
/// configure phase fails.
pub struct CmakeDriver<'a> {
    runner: &'a dyn ProcessRunner,
    cmake: PathBuf,
}

impl<'a> CmakeDriver<'a> {
    /// Locate cmake and create a driver.
    ///
    /// Surfaces [`BuildError::ToolMissing`] before any subprocess is
    /// attempted.
    pub fn new(runner: &'a dyn ProcessRunner) -> Result<Self, BuildError> {
        let cmake = find_cmake().ok_or(BuildError::ToolMissing)?;
        Ok(CmakeDriver { runner, cmake })
    }

    /// Driver with an explicit cmake path, for tests.
    #[cfg(test)]
    pub fn with_cmake(runner: &'a dyn ProcessRunner, cmake: PathBuf) -> Self {
        CmakeDriver { runner, cmake }
    }

    /// Run the configure phase, then the build phase, inside `build_dir`.
    ///
    /// `build_dir` is created if absent. The `VERSION_INFO` define is
    /// carried into both phases' environment via `CXXFLAGS`.
    pub fn configure_and_build(
        &self,
        source_root: &Path,
        build_dir: &Path,
        plan: &BuildPlan,
    ) -> Result<()> {
        ensure_dir(build_dir)?;

        let ambient = std::env::var("CXXFLAGS").unwrap_or_default();
        let cxxflags = plan.cxxflags(&ambient);

        tracing::info!("configuring {}", source_root.display());
        let configure = ProcessBuilder::new(&self.cmake)
            .arg(source_root)
            .args(plan.configure_args())
            .env("CXXFLAGS", &cxxflags)
            .cwd(build_dir);
        let status = self.runner.run(&configure)?;
        if !status.success() {
            return Err(BuildError::ConfigureFailed {
                status: status.code(),
            }
            .into());
        }

        tracing::info!("building in {}", build_dir.display());
        let build = ProcessBuilder::new(&self.cmake)
            .arg("--build")
            .arg(".")
            .args(plan.build_args())
            .cwd(build_dir);
        let status = self.runner.run(&build)?;
        if !status.success() {
            return Err(BuildError::BuildFailed {
                status: status.code(),
            }
            .into());
        }

        // Blank line keeps cmake's output apart from what follows.
        println!();
        Ok(())
    }

    /// Check that the installed cmake is new enough for the Visual
    /// Studio generator. Only meaningful on Windows.
    pub fn check_windows_version(&self) -> Result<()> {
        let probe = ProcessBuilder::new(&self.cmake).arg("--version");
        let output = self.runner.capture(&probe)?;
        if !output.status.success() {
            anyhow::bail!("`{} --version` failed", self.cmake.display());
        }
        let version = parse_cmake_version(&output.stdout)
            .with_context(|| format!("unrecognized cmake version output:\n{}", output.stdout))?;

        if version < MIN_WINDOWS_VERSION {
            anyhow::bail!(
                "cmake >= {}.{}.{} is required on Windows (found {}.{}.{})",
                MIN_WINDOWS_VERSION.0,
                MIN_WINDOWS_VERSION.1,
                MIN_WINDOWS_VERSION.2,
                version.0,
                version.1,
                version.2
            );
        }
        Ok(())
    }
}

/// Extract the version triple from `cmake --version` output.
fn parse_cmake_version(output: &str) -> Option<(u64, u64, u64)> {
    let re = Regex::new(r"version\s*(\d+)\.(\d+)(?:\.(\d+))?").ok()?;
    let caps = re.captures(output)?;

    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    Some((major, minor, patch))
}

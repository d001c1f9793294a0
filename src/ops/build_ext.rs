//! Implementation of `musher-build build-ext`.
//!
//! Builds the distributable Musher module (the C++ tests are switched
//! off) and places the library at the output directory.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::compiler::{default_cxx_from_env, select_cxx};
use crate::builder::configure::{configure, BuildMode, BuildOptions};
use crate::builder::{CmakeDriver, Platform};
use crate::ops::build_tests::BUILD_DIR;
use crate::util::config::MusherConfig;
use crate::util::fs::RealFileProbe;
use crate::util::process::SystemRunner;

/// Options for the extension build.
#[derive(Debug, Clone, Default)]
pub struct ExtOptions {
    pub mode: BuildMode,

    /// Override for the library output directory (defaults to the
    /// project root, or `build.output_dir` from `Musher.toml`).
    pub out_dir: Option<PathBuf>,
}

/// Configure and build the distributable module.
pub fn build_extension(root: &Path, ext: &ExtOptions) -> Result<()> {
    let config = MusherConfig::load(root)?;
    let platform = Platform::probe();
    let compiler = select_cxx(&default_cxx_from_env(), &RealFileProbe);

    let runner = SystemRunner;
    let driver = CmakeDriver::new(&runner)?;
    if platform.is_windows() {
        driver.check_windows_version()?;
    }

    let out_dir = match &ext.out_dir {
        Some(dir) => root.join(dir),
        None => config.output_dir(root),
    };

    let opts = BuildOptions {
        mode: ext.mode,
        native_tests_only: false,
        ..Default::default()
    };
    let plan = configure(&opts, platform, &compiler, &out_dir, &config.package.version);

    driver.configure_and_build(&config.source_dir(root), &root.join(BUILD_DIR), &plan)
}

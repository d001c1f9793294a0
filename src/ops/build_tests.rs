//! Implementation of `musher-build build-tests`.
//!
//! Builds the C++ test binaries (the distributable module is switched
//! off) and optionally runs them afterwards.

use std::path::Path;

use anyhow::Result;

use crate::builder::compiler::{default_cxx_from_env, select_cxx};
use crate::builder::configure::{configure, BuildOptions};
use crate::builder::{CmakeDriver, Platform};
use crate::harness::{TestRunner, CPP_TESTS};
use crate::util::config::MusherConfig;
use crate::util::fs::RealFileProbe;
use crate::util::process::SystemRunner;

/// Directory (under the project root) where cmake generates its files.
pub const BUILD_DIR: &str = "build";

/// Directory (under the project root) where the test binaries land.
pub const TEST_BIN_DIR: &str = "test_bin";

/// Configure and build the native tests; run them when requested.
pub fn build_tests(root: &Path, opts: &BuildOptions) -> Result<()> {
    let config = MusherConfig::load(root)?;
    let platform = Platform::probe();
    let compiler = select_cxx(&default_cxx_from_env(), &RealFileProbe);

    let plan = configure(
        opts,
        platform,
        &compiler,
        &config.output_dir(root),
        &config.package.version,
    );

    let runner = SystemRunner;
    let driver = CmakeDriver::new(&runner)?;
    driver.configure_and_build(&config.source_dir(root), &root.join(BUILD_DIR), &plan)?;

    if opts.run_tests {
        println!("running tests...");
        if !opts.filter.is_empty() {
            println!("gtest filter: {}", opts.filter);
        }
        let tests = TestRunner::new(&runner, &CPP_TESTS, root.to_path_buf());
        tests.run_all(&root.join(TEST_BIN_DIR), opts.mode, platform, &opts.filter)?;
    }

    Ok(())
}

//! Native test harness: resolves and runs the Musher GoogleTest
//! binaries in a fixed order, failing fast on the first nonzero exit.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::configure::BuildMode;
use crate::builder::errors::BuildError;
use crate::builder::platform::Platform;
use crate::util::process::{ProcessBuilder, ProcessRunner};

/// One registered native test binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSpec {
    pub name: &'static str,
}

/// The fixed registry of Musher C++ test binaries, in execution order.
pub const CPP_TESTS: [TestSpec; 3] = [
    TestSpec {
        name: "test_musher_library",
    },
    TestSpec {
        name: "test_musher_utils",
    },
    TestSpec {
        name: "test_peak_detection",
    },
];

impl TestSpec {
    /// Resolve the binary's path under `bin_dir`.
    ///
    /// Windows builds segment binaries by configuration and carry an
    /// `.exe` suffix; elsewhere the name is used directly.
    pub fn resolved_path(&self, bin_dir: &Path, mode: BuildMode, platform: Platform) -> PathBuf {
        if platform.is_windows() {
            bin_dir.join(mode.as_str()).join(format!("{}.exe", self.name))
        } else {
            bin_dir.join(self.name)
        }
    }
}

/// Runs a registry of test binaries sequentially.
pub struct TestRunner<'a> {
    runner: &'a dyn ProcessRunner,
    registry: &'a [TestSpec],
    /// Working directory for the test processes (the project root, so
    /// tests find their fixture files).
    root: PathBuf,
}

impl<'a> TestRunner<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, registry: &'a [TestSpec], root: PathBuf) -> Self {
        TestRunner {
            runner,
            registry,
            root,
        }
    }

    /// Run every registered binary in order.
    ///
    /// A non-empty `filter` is passed to every binary as
    /// `--gtest_filter=<filter>`; binaries with no matching sub-tests
    /// treat it as a no-op. The first nonzero exit aborts the batch.
    pub fn run_all(
        &self,
        bin_dir: &Path,
        mode: BuildMode,
        platform: Platform,
        filter: &str,
    ) -> Result<()> {
        for test in self.registry {
            let path = test.resolved_path(bin_dir, mode, platform);

            println!("{}", "=".repeat(35));
            println!("Running Test '{}'", test.name);
            println!("{}", "=".repeat(35));

            let mut cmd = ProcessBuilder::new(&path).cwd(&self.root);
            if !filter.is_empty() {
                cmd = cmd.arg(format!("--gtest_filter={}", filter));
            }

            let status = self.runner.run(&cmd)?;
            if !status.success() {
                return Err(BuildError::TestFailed {
                    name: test.name.to_string(),
                    filter: filter.to_string(),
                    status: status.code(),
                }
                .into());
            }
        }
        Ok(())
    }
}

//! `musher-build build-tests` command

use anyhow::{Context, Result};

use crate::cli::BuildTestsArgs;
use musher_build::ops::build_tests::build_tests;
use musher_build::{BuildMode, BuildOptions};

pub fn execute(args: BuildTestsArgs) -> Result<()> {
    let root = std::env::current_dir().context("failed to resolve current directory")?;

    let opts = BuildOptions {
        mode: if args.debug {
            BuildMode::Debug
        } else {
            BuildMode::Release
        },
        run_tests: args.run_tests,
        filter: args.filter,
        native_tests_only: true,
    };

    build_tests(&root, &opts)
}

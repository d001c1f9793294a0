//! `musher-build build-ext` command

use anyhow::{Context, Result};

use crate::cli::BuildExtArgs;
use musher_build::ops::build_ext::{build_extension, ExtOptions};
use musher_build::BuildMode;

pub fn execute(args: BuildExtArgs) -> Result<()> {
    let root = std::env::current_dir().context("failed to resolve current directory")?;

    let opts = ExtOptions {
        mode: if args.debug {
            BuildMode::Debug
        } else {
            BuildMode::Release
        },
        out_dir: args.out_dir,
    };

    build_extension(&root, &opts)
}

//! `musher-build clean` command

use anyhow::{Context, Result};

use crate::cli::CleanArgs;
use musher_build::ops::clean::clean;

pub fn execute(_args: CleanArgs) -> Result<()> {
    let root = std::env::current_dir().context("failed to resolve current directory")?;

    let report = clean(&root);
    for path in &report.removed {
        eprintln!("cleaned {}", path.display());
    }
    eprintln!("\u{2713} cleaning done");

    Ok(())
}

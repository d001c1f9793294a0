//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// musher-build - build orchestrator for the Musher native library
#[derive(Parser)]
#[command(name = "musher-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the C++ tests for the Musher library
    BuildTests(BuildTestsArgs),

    /// Build the distributable Musher module
    BuildExt(BuildExtArgs),

    /// Remove all generated build artifacts
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildTestsArgs {
    /// Build with config Debug (default is Release)
    #[arg(long)]
    pub debug: bool,

    /// Run the tests after building
    #[arg(short, long)]
    pub run_tests: bool,

    /// Choose which tests to run; passed to --gtest_filter
    #[arg(short, long, default_value = "")]
    pub filter: String,
}

#[derive(Args)]
pub struct BuildExtArgs {
    /// Build with config Debug (default is Release)
    #[arg(long)]
    pub debug: bool,

    /// Directory to place the built library in (defaults to the project root)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct CleanArgs {}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

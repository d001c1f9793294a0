//! Shared utilities: configuration, filesystem helpers, subprocess
//! execution.

pub mod config;
pub mod fs;
pub mod process;

pub use config::MusherConfig;
pub use fs::{FileProbe, RealFileProbe};
pub use process::{ExitCode, ProcessBuilder, ProcessOutput, ProcessRunner, SystemRunner};

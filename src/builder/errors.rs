//! Build and test failure taxonomy.

use thiserror::Error;

/// Fatal failures of the build/test phases.
///
/// Subprocess failures are never caught-and-retried; they abort the
/// current operation and propagate a nonzero exit status.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(
        "cmake not found\n\
         \n\
         CMake is required to build the Musher native library.\n\
         Install CMake and ensure it's in your PATH."
    )]
    ToolMissing,

    #[error("cmake configure step failed{}", exit_code(.status))]
    ConfigureFailed { status: Option<i32> },

    #[error("cmake build step failed{}", exit_code(.status))]
    BuildFailed { status: Option<i32> },

    #[error("test `{name}` failed{}{}", exit_code(.status), filter_note(.filter))]
    TestFailed {
        name: String,
        filter: String,
        status: Option<i32>,
    },
}

fn exit_code(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

fn filter_note(filter: &str) -> String {
    if filter.is_empty() {
        String::new()
    } else {
        format!(" (gtest filter: {})", filter)
    }
}

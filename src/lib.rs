//! musher-build - Build orchestrator for the Musher native library
//!
//! This crate drives the two-phase CMake build of the Musher C++ library,
//! runs its GoogleTest binaries, and cleans generated build artifacts.

pub mod builder;
pub mod harness;
pub mod ops;
pub mod util;

/// Test utilities and mocks for musher-build unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides mock implementations for filesystem
/// probing and process execution.
#[cfg(test)]
pub mod test_support;

pub use builder::configure::{BuildMode, BuildOptions};
pub use builder::errors::BuildError;
pub use builder::platform::Platform;

//! Command implementations for the musher-build CLI.

pub mod build_ext;
pub mod build_tests;
pub mod clean;
pub mod completions;

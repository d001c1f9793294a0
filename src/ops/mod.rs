//! Implementations of the musher-build operations.

pub mod build_ext;
pub mod build_tests;
pub mod clean;

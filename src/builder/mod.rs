//! CMake build orchestration: platform probing, compiler selection,
//! argument construction, and the two-phase configure/build driver.

pub mod cmake;
pub mod compiler;
pub mod configure;
pub mod errors;
pub mod platform;

pub use cmake::CmakeDriver;
pub use configure::{BuildMode, BuildOptions, BuildPlan};
pub use errors::BuildError;
pub use platform::{OsKind, Platform};

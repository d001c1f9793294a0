//! Translation of build options into CMake argument lists.
//!
//! Arguments are modeled as typed tokens and only serialized to strings
//! at the subprocess boundary, so construction logic is unit-testable
//! without spawning cmake.

use std::path::Path;

use crate::builder::compiler::CompilerChoice;
use crate::builder::platform::Platform;

/// Debug/Release build-type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    Debug,
    #[default]
    Release,
}

impl BuildMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        }
    }
}

/// User-facing build options, immutable once constructed.
///
/// `native_tests_only` selects which CMake module is built: the C++
/// test binaries or the distributable module. Exactly one is enabled
/// per invocation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub mode: BuildMode,
    pub run_tests: bool,
    pub filter: String,
    pub native_tests_only: bool,
}

/// One token of the configure-phase argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureArg {
    /// `-D<var>=<value>`
    Define { var: String, value: String },
    /// `-A <arch>` (Visual Studio generator platform)
    Arch(String),
}

impl ConfigureArg {
    fn define(var: &str, value: impl Into<String>) -> ConfigureArg {
        ConfigureArg::Define {
            var: var.to_string(),
            value: value.into(),
        }
    }

    fn push_args(&self, out: &mut Vec<String>) {
        match self {
            ConfigureArg::Define { var, value } => out.push(format!("-D{}={}", var, value)),
            ConfigureArg::Arch(arch) => {
                out.push("-A".to_string());
                out.push(arch.clone());
            }
        }
    }
}

/// One token of the build-phase argument list.
///
/// `Native` tokens are forwarded to the underlying build driver (MSBuild
/// or make); serialization inserts the `--` delimiter before the first
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildArg {
    /// `--config <cfg>` (multi-config generators)
    Config(String),
    Native(String),
}

/// Normalized configuration for one build: the two argument lists plus
/// the preprocessor version define carried via the environment.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub configure: Vec<ConfigureArg>,
    pub build: Vec<BuildArg>,
    version: String,
}

impl BuildPlan {
    /// Serialize the configure-phase tokens.
    pub fn configure_args(&self) -> Vec<String> {
        let mut out = Vec::new();
        for arg in &self.configure {
            arg.push_args(&mut out);
        }
        out
    }

    /// Serialize the build-phase tokens, inserting the `--` delimiter
    /// before the first native-driver token.
    pub fn build_args(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut delimited = false;
        for arg in &self.build {
            match arg {
                BuildArg::Config(cfg) => {
                    out.push("--config".to_string());
                    out.push(cfg.clone());
                }
                BuildArg::Native(flag) => {
                    if !delimited {
                        out.push("--".to_string());
                        delimited = true;
                    }
                    out.push(flag.clone());
                }
            }
        }
        out
    }

    /// `CXXFLAGS` value carrying the version define, appended to the
    /// ambient flags so the built artifact can report its own version.
    pub fn cxxflags(&self, ambient: &str) -> String {
        format!("{} -DVERSION_INFO=\\\"{}\\\"", ambient, self.version)
    }
}

/// Combine options, platform, and compiler choice into a [`BuildPlan`].
///
/// Never fails; unused option combinations (e.g. a filter on a
/// build-only run) are tolerated and ignored downstream.
pub fn configure(
    opts: &BuildOptions,
    platform: Platform,
    compiler: &CompilerChoice,
    output_dir: &Path,
    version: &str,
) -> BuildPlan {
    let cfg = opts.mode.as_str();
    let mut configure = vec![ConfigureArg::define(
        "CMAKE_LIBRARY_OUTPUT_DIRECTORY",
        path_value(output_dir),
    )];

    if let Some(cxx) = &compiler.override_path {
        configure.push(ConfigureArg::define("CMAKE_CXX_COMPILER", path_value(cxx)));
    }

    // Exactly one module is built per run: tests or the distributable.
    if opts.native_tests_only {
        configure.push(ConfigureArg::define("BUILD_PYTHON_MODULE", "OFF"));
    } else {
        configure.push(ConfigureArg::define("BUILD_TESTING", "OFF"));
    }

    // Emitted on every platform; multi-config generators (Visual
    // Studio) ignore it and take `--config` at build time instead.
    configure.push(ConfigureArg::define("CMAKE_BUILD_TYPE", cfg));

    let mut build = vec![BuildArg::Config(cfg.to_string())];

    if platform.is_windows() {
        // Multi-config generators ignore CMAKE_LIBRARY_OUTPUT_DIRECTORY
        // and need the per-configuration variable instead.
        configure.push(ConfigureArg::define(
            &format!("CMAKE_LIBRARY_OUTPUT_DIRECTORY_{}", cfg.to_uppercase()),
            path_value(output_dir),
        ));
        if platform.is_64bit() {
            configure.push(ConfigureArg::Arch("x64".to_string()));
        }
        build.push(BuildArg::Native("/m".to_string()));
    } else {
        build.push(BuildArg::Native("-j2".to_string()));
    }

    BuildPlan {
        configure,
        build,
        version: version.to_string(),
    }
}

fn path_value(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::platform::OsKind;
    use std::path::PathBuf;

    fn unix64() -> Platform {
        Platform {
            os: OsKind::Unix,
            pointer_width: 64,
        }
    }

    fn windows(pointer_width: u32) -> Platform {
        Platform {
            os: OsKind::Windows,
            pointer_width,
        }
    }

    fn opts(native_tests_only: bool, mode: BuildMode) -> BuildOptions {
        BuildOptions {
            mode,
            native_tests_only,
            ..Default::default()
        }
    }

    #[test]
    fn test_module_toggles_are_mutually_exclusive() {
        for native_tests_only in [true, false] {
            for mode in [BuildMode::Debug, BuildMode::Release] {
                let plan = configure(
                    &opts(native_tests_only, mode),
                    unix64(),
                    &CompilerChoice::none(),
                    Path::new("/out"),
                    "0.1",
                );
                let args = plan.configure_args();

                let disables_python = args.contains(&"-DBUILD_PYTHON_MODULE=OFF".to_string());
                let disables_tests = args.contains(&"-DBUILD_TESTING=OFF".to_string());
                assert_eq!(disables_python, native_tests_only);
                assert_eq!(disables_tests, !native_tests_only);
            }
        }
    }

    #[test]
    fn test_output_dir_comes_first() {
        let plan = configure(
            &opts(true, BuildMode::Release),
            unix64(),
            &CompilerChoice::none(),
            Path::new("/src/musher"),
            "0.1",
        );

        assert_eq!(
            plan.configure_args()[0],
            "-DCMAKE_LIBRARY_OUTPUT_DIRECTORY=/src/musher"
        );
    }

    #[test]
    fn test_compiler_override_becomes_define() {
        let compiler = CompilerChoice {
            override_path: Some(PathBuf::from("/usr/bin/g++-8")),
        };
        let plan = configure(
            &opts(true, BuildMode::Release),
            unix64(),
            &compiler,
            Path::new("/out"),
            "0.1",
        );

        assert!(plan
            .configure_args()
            .contains(&"-DCMAKE_CXX_COMPILER=/usr/bin/g++-8".to_string()));
    }

    #[test]
    fn test_unix_build_args_end_with_fixed_concurrency() {
        let plan = configure(
            &opts(true, BuildMode::Release),
            unix64(),
            &CompilerChoice::none(),
            Path::new("/out"),
            "0.1",
        );

        assert_eq!(plan.build_args(), vec!["--config", "Release", "--", "-j2"]);
    }

    #[test]
    fn test_windows_64bit_requests_x64_and_msbuild_parallelism() {
        let plan = configure(
            &opts(true, BuildMode::Debug),
            windows(64),
            &CompilerChoice::none(),
            Path::new("C:\\out"),
            "0.1",
        );
        let args = plan.configure_args();

        let arch = args.iter().position(|a| a == "-A").expect("-A present");
        assert_eq!(args[arch + 1], "x64");
        assert!(args.contains(&"-DCMAKE_LIBRARY_OUTPUT_DIRECTORY_DEBUG=C:\\out".to_string()));
        assert_eq!(plan.build_args(), vec!["--config", "Debug", "--", "/m"]);
    }

    #[test]
    fn test_windows_32bit_does_not_request_x64() {
        let plan = configure(
            &opts(true, BuildMode::Release),
            windows(32),
            &CompilerChoice::none(),
            Path::new("C:\\out"),
            "0.1",
        );

        assert!(!plan.configure_args().iter().any(|a| a == "-A"));
    }

    #[test]
    fn test_cxxflags_append_version_define() {
        let plan = configure(
            &opts(false, BuildMode::Release),
            unix64(),
            &CompilerChoice::none(),
            Path::new("/out"),
            "0.1",
        );

        assert_eq!(plan.cxxflags("-O2"), "-O2 -DVERSION_INFO=\\\"0.1\\\"");
        // Version rides in the environment, never in the argument list.
        assert!(!plan.configure_args().iter().any(|a| a.contains("VERSION_INFO")));
    }
}

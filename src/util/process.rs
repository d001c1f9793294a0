//! Subprocess execution utilities.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

/// Exit status of a finished subprocess.
///
/// `None` means the process was terminated by a signal rather than
/// exiting on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub Option<i32>);

impl ExitCode {
    pub fn success(&self) -> bool {
        self.0 == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.0
    }
}

/// Builder for subprocess invocations.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.env
            .insert(key.as_ref().to_string(), value.as_ref().to_string());
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    pub fn get_program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn get_env(&self) -> &HashMap<String, String> {
        &self.env
    }

    /// Build the std Command.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Display the command for log and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Stdout and exit status of a captured subprocess.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub status: ExitCode,
    pub stdout: String,
}

/// Capability for running external processes.
///
/// Build and test logic goes through this trait so it can be exercised
/// with a scripted runner instead of spawning real subprocesses.
pub trait ProcessRunner {
    /// Run to completion with inherited stdio and return the exit status.
    fn run(&self, cmd: &ProcessBuilder) -> Result<ExitCode>;

    /// Run to completion capturing stdout, for probes like
    /// `cmake --version`; build invocations stream output instead.
    fn capture(&self, cmd: &ProcessBuilder) -> Result<ProcessOutput>;
}

/// The real runner: spawns the process and blocks until it exits,
/// streaming its output to the user.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, cmd: &ProcessBuilder) -> Result<ExitCode> {
        tracing::debug!("running `{}`", cmd.display_command());

        let status = cmd
            .build_command()
            .status()
            .with_context(|| format!("failed to execute `{}`", cmd.display_command()))?;

        Ok(ExitCode(status.code()))
    }

    fn capture(&self, cmd: &ProcessBuilder) -> Result<ProcessOutput> {
        tracing::debug!("capturing `{}`", cmd.display_command());

        let output = cmd
            .build_command()
            .output()
            .with_context(|| format!("failed to execute `{}`", cmd.display_command()))?;

        Ok(ProcessOutput {
            status: ExitCode(output.status.code()),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Find the cmake executable in PATH.
pub fn find_cmake() -> Option<PathBuf> {
    which::which("cmake").ok()
}

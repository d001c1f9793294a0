//! Test utilities and mocks for musher-build unit tests.
//!
//! Provides mock implementations for the process-runner and
//! file-probe capabilities, so build and test orchestration can be
//! exercised without spawning subprocesses or touching the real
//! filesystem.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;

use crate::util::fs::FileProbe;
use crate::util::process::{ExitCode, ProcessBuilder, ProcessOutput, ProcessRunner};

/// A recorded subprocess invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: HashMap<String, String>,
}

/// Process runner that records calls and returns scripted statuses.
///
/// Statuses are consumed in order; once the script runs out, every
/// further call succeeds. Captured invocations consume scripted stdout
/// the same way, defaulting to empty successful output.
#[derive(Debug, Default)]
pub struct MockRunner {
    statuses: Mutex<Vec<i32>>,
    captures: Mutex<Vec<ProcessOutput>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRunner {
    pub fn always_succeeding() -> MockRunner {
        MockRunner::default()
    }

    pub fn with_statuses(statuses: &[i32]) -> MockRunner {
        MockRunner {
            statuses: Mutex::new(statuses.to_vec()),
            ..Default::default()
        }
    }

    /// Script the stdout of the next captured invocation.
    pub fn with_capture_stdout(stdout: &str) -> MockRunner {
        MockRunner {
            captures: Mutex::new(vec![ProcessOutput {
                status: ExitCode(Some(0)),
                stdout: stdout.to_string(),
            }]),
            ..Default::default()
        }
    }

    /// All invocations observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, cmd: &ProcessBuilder) {
        self.calls.lock().unwrap().push(RecordedCall {
            program: cmd.get_program().to_path_buf(),
            args: cmd.get_args().to_vec(),
            cwd: cmd.get_cwd().map(Path::to_path_buf),
            env: cmd.get_env().clone(),
        });
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, cmd: &ProcessBuilder) -> Result<ExitCode> {
        self.record(cmd);

        let mut statuses = self.statuses.lock().unwrap();
        let code = if statuses.is_empty() {
            0
        } else {
            statuses.remove(0)
        };
        Ok(ExitCode(Some(code)))
    }

    fn capture(&self, cmd: &ProcessBuilder) -> Result<ProcessOutput> {
        self.record(cmd);

        let mut captures = self.captures.lock().unwrap();
        if captures.is_empty() {
            Ok(ProcessOutput {
                status: ExitCode(Some(0)),
                stdout: String::new(),
            })
        } else {
            Ok(captures.remove(0))
        }
    }
}

/// In-memory file probe.
#[derive(Debug, Default)]
pub struct MockFileProbe {
    paths: HashSet<PathBuf>,
}

impl MockFileProbe {
    pub fn empty() -> MockFileProbe {
        MockFileProbe::default()
    }

    pub fn with_paths(paths: &[&str]) -> MockFileProbe {
        MockFileProbe {
            paths: paths.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FileProbe for MockFileProbe {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}

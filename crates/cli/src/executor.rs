// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution.
//!
//! The runner talks to the build tool only through [`CommandExecutor`],
//! so tests can substitute a scripted fake for the real process.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};
use crate::invocation::Invocation;

/// Exit code reported when a status carries neither a code nor a signal.
const UNKNOWN_FAILURE: i32 = 1;

/// Runs one invocation to completion and reports its exit code.
pub trait CommandExecutor {
    /// Execute the invocation, blocking until it exits.
    ///
    /// Returns the exit code (0 = success). An error means the process
    /// could not be started at all.
    fn execute(&self, invocation: &Invocation) -> Result<i32>;
}

/// Executes invocations as child processes with inherited stdio.
#[derive(Debug, Default)]
pub struct ProcessExecutor {
    dir: Option<PathBuf>,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run children in `dir` instead of the current directory.
    pub fn with_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.dir = dir;
        self
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<i32> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| Error::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        Ok(exit_code(status))
    }
}

/// Map an exit status to a shell-style exit code.
///
/// On Unix a child killed by a signal maps to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    UNKNOWN_FAILURE
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

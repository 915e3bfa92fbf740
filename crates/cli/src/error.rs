// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::ErrorKind;

/// Duo error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// The build tool could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type using duo Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes duo produces on its own behalf.
///
/// When a build tool invocation fails, duo exits with the tool's code
/// instead, so these only cover duo's own failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every invocation succeeded
    Success = 0,
    /// Invalid arguments (matches clap's usage error code)
    ArgumentError = 2,
    /// Internal error
    InternalError = 3,
    /// The tool exists but could not be executed
    CannotExecute = 126,
    /// The tool was not found
    CommandNotFound = 127,
}

impl ExitCode {
    /// Process exit status for this code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Argument(_) => ExitCode::ArgumentError,
            Error::Spawn { source, .. } if source.kind() == ErrorKind::NotFound => {
                ExitCode::CommandNotFound
            }
            Error::Spawn { .. } => ExitCode::CannotExecute,
            Error::Output(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

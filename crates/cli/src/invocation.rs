// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build tool invocations.
//!
//! Arguments are assembled as an ordered list, never as a shell string:
//! `<subcommand> <scope flags> [--all-features] [--manifest-path PATH] [passthrough...]`

use std::fmt;

use serde::Serialize;

use crate::scope::Scope;

/// Flag enabling every optional feature.
pub const ALL_FEATURES_FLAG: &str = "--all-features";

/// Flag pointing the tool at a specific manifest.
pub const MANIFEST_PATH_FLAG: &str = "--manifest-path";

/// Primary build tool subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Test,
    Check,
}

impl Subcommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Subcommand::Test => "test",
            Subcommand::Check => "check",
        }
    }
}

/// Feature selection for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Features {
    /// The package's default features.
    Default,
    /// Every optional feature enabled.
    All,
}

impl Features {
    /// Label used in logs and plan output.
    pub fn label(self) -> &'static str {
        match self {
            Features::Default => "default",
            Features::All => "all-features",
        }
    }

    fn flag(self) -> Option<&'static str> {
        match self {
            Features::Default => None,
            Features::All => Some(ALL_FEATURES_FLAG),
        }
    }
}

/// Everything that shapes the argument list, apart from feature selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub subcommand: Subcommand,
    pub scope: Scope,
    pub manifest_path: Option<String>,
    /// Extra arguments appended verbatim after everything else.
    pub passthrough: Vec<String>,
}

impl Request {
    pub fn new(subcommand: Subcommand, scope: Scope) -> Self {
        Self {
            subcommand,
            scope,
            manifest_path: None,
            passthrough: Vec::new(),
        }
    }
}

/// Build the argument list for one invocation.
pub fn build_args(request: &Request, features: Features) -> Vec<String> {
    let mut args = Vec::with_capacity(6 + request.passthrough.len());
    args.push(request.subcommand.as_str().to_string());
    args.extend(request.scope.flags());
    if let Some(flag) = features.flag() {
        args.push(flag.to_string());
    }
    if let Some(path) = &request.manifest_path {
        args.push(MANIFEST_PATH_FLAG.to_string());
        args.push(path.clone());
    }
    args.extend(request.passthrough.iter().cloned());
    args
}

/// A single build tool command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub label: &'static str,
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: &str, request: &Request, features: Features) -> Self {
        Self {
            label: features.label(),
            program: program.to_string(),
            args: build_args(request, features),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The two invocations of a run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub subcommand: Subcommand,
    pub scope: Scope,
    invocations: [Invocation; 2],
}

impl Plan {
    pub fn new(program: &str, request: &Request) -> Self {
        Self {
            subcommand: request.subcommand,
            scope: request.scope.clone(),
            invocations: [
                Invocation::new(program, request, Features::Default),
                Invocation::new(program, request, Features::All),
            ],
        }
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;

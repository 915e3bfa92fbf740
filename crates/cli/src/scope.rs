// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation scope: the whole workspace or a single package.

use std::fmt;

/// Flag selecting every package in the workspace.
pub const WORKSPACE_FLAG: &str = "--workspace";

/// Flag selecting a single package by name.
pub const PACKAGE_FLAG: &str = "--package";

/// Breadth of a run, resolved once from the optional package argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Workspace,
    Package(String),
}

impl Scope {
    /// Resolve the scope from the optional package argument.
    ///
    /// A missing or empty argument selects the workspace. Anything else is
    /// taken verbatim as a package name.
    pub fn resolve(package: Option<&str>) -> Self {
        match package {
            Some(name) if !name.is_empty() => Scope::Package(name.to_string()),
            _ => Scope::Workspace,
        }
    }

    /// Scope selection arguments for the build tool.
    ///
    /// The package name is its own argument, so whitespace or shell
    /// metacharacters in it never reach a shell.
    pub fn flags(&self) -> Vec<String> {
        match self {
            Scope::Workspace => vec![WORKSPACE_FLAG.to_string()],
            Scope::Package(name) => vec![PACKAGE_FLAG.to_string(), name.clone()],
        }
    }

    /// Package name, if scoped to one.
    pub fn package(&self) -> Option<&str> {
        match self {
            Scope::Workspace => None,
            Scope::Package(name) => Some(name),
        }
    }

    /// Short kind label ("workspace" or "package").
    pub fn kind(&self) -> &'static str {
        match self {
            Scope::Workspace => "workspace",
            Scope::Package(_) => "package",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Workspace => f.write_str("workspace"),
            Scope::Package(name) => write!(f, "package {name}"),
        }
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;

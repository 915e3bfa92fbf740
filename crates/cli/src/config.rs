// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration resolved from command-line flags and environment.

use std::path::PathBuf;

use termcolor::ColorChoice;

use crate::cli::{OutputFormat, RunArgs};
use crate::color::choose_color;
use crate::error::{Error, Result};
use crate::invocation::{Request, Subcommand};
use crate::scope::Scope;

/// Check if debug output is enabled via the DUO_DEBUG env var.
fn debug_env() -> bool {
    std::env::var("DUO_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Everything a `test` or `check` run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub subcommand: Subcommand,
    pub scope: Scope,
    pub tool: String,
    pub manifest_path: Option<String>,
    pub dir: Option<PathBuf>,
    pub passthrough: Vec<String>,
    pub dry_run: bool,
    pub output: OutputFormat,
    pub verbose: bool,
    pub color: ColorChoice,
}

impl RunConfig {
    /// Validate flag combinations and resolve the scope.
    pub fn from_args(subcommand: Subcommand, args: &RunArgs) -> Result<Self> {
        if args.output == OutputFormat::Json && !args.dry_run {
            return Err(Error::Argument("--output json requires --dry-run".into()));
        }

        let manifest_path = args
            .manifest_path
            .as_ref()
            .map(|path| {
                path.to_str().map(str::to_string).ok_or_else(|| {
                    Error::Argument(format!(
                        "manifest path is not valid UTF-8: {}",
                        path.display()
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            subcommand,
            scope: Scope::resolve(args.package.as_deref()),
            tool: args.tool.clone(),
            manifest_path,
            dir: args.dir.clone(),
            passthrough: args.passthrough.clone(),
            dry_run: args.dry_run,
            output: args.output,
            verbose: args.verbose || debug_env(),
            color: choose_color(args.color, args.no_color),
        })
    }

    /// Request the invocation builder works from.
    pub fn request(&self) -> Request {
        Request {
            subcommand: self.subcommand,
            scope: self.scope.clone(),
            manifest_path: self.manifest_path.clone(),
            passthrough: self.passthrough.clone(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

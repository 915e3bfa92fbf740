// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Run cargo test or check twice: with default features, then with all features
#[derive(Parser)]
#[command(name = "duo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the test suite, then again with all features
    Test(RunArgs),
    /// Type-check, then again with all features
    Check(RunArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Package to run (default: whole workspace)
    ///
    /// Hyphen-leading names that are not duo flags are taken as the package.
    #[arg(value_name = "PACKAGE", allow_hyphen_values = true)]
    pub package: Option<String>,

    /// Build tool to invoke
    #[arg(long, env = "DUO_TOOL", default_value = "cargo", value_name = "PROGRAM")]
    pub tool: String,

    /// Path to Cargo.toml, forwarded to both invocations
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Run the build tool in this directory
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Print the planned command lines without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (json requires --dry-run)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Extra arguments appended to both invocations
    #[arg(last = true, value_name = "ARGS")]
    pub passthrough: Vec<String>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

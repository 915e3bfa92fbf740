// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run a cargo subcommand twice, with default features and then with all
//! features, over the whole workspace or a single package.

pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod error;
pub mod executor;
pub mod invocation;
pub mod output;
pub mod runner;
pub mod scope;
pub mod verbose;

pub use cli::{Cli, Command, CompletionsArgs, OutputFormat, RunArgs};
pub use config::RunConfig;
pub use error::{Error, ExitCode, Result};
pub use executor::{CommandExecutor, ProcessExecutor};
pub use invocation::{Features, Invocation, Plan, Request, Subcommand, build_args};
pub use runner::{RunOutcome, Runner, StepResult};
pub use scope::Scope;
pub use verbose::VerboseLogger;

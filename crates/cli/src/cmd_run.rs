// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `test` and `check` command implementation.

use termcolor::StandardStream;

use duo::cli::{OutputFormat, RunArgs};
use duo::config::RunConfig;
use duo::error::ExitCode;
use duo::executor::ProcessExecutor;
use duo::invocation::{Plan, Subcommand};
use duo::output::{json, text};
use duo::runner::Runner;
use duo::verbose::VerboseLogger;

/// Run the subcommand over the resolved scope and return the exit code.
pub fn run(subcommand: Subcommand, args: &RunArgs) -> anyhow::Result<i32> {
    let config = RunConfig::from_args(subcommand, args)?;
    let plan = Plan::new(&config.tool, &config.request());
    tracing::debug!(
        subcommand = subcommand.as_str(),
        scope = %config.scope,
        tool = %config.tool,
        "resolved plan"
    );

    if config.dry_run {
        match config.output {
            OutputFormat::Text => {
                let mut stdout = StandardStream::stdout(config.color);
                text::write_status(&mut stdout, &plan.scope).map_err(duo::Error::from)?;
                text::write_plan(&mut stdout, &plan).map_err(duo::Error::from)?;
            }
            OutputFormat::Json => {
                json::write_plan(&mut std::io::stdout().lock(), &plan)
                    .map_err(duo::Error::from)?;
            }
        }
        return Ok(ExitCode::Success.code());
    }

    let verbose = VerboseLogger::new(config.verbose);
    let executor = ProcessExecutor::new().with_dir(config.dir.clone());
    let mut stdout = StandardStream::stdout(config.color);
    let outcome = Runner::new(&executor, &verbose).run(&plan, &mut stdout)?;

    Ok(outcome.exit_code())
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duo CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use duo::cli::{Cli, Command};
use duo::error::ExitCode;
use duo::invocation::Subcommand;

mod cmd_run;

fn init_logging() {
    let filter = EnvFilter::try_from_env("DUO_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("duo: {}", e);
            match e.downcast_ref::<duo::Error>() {
                Some(err) => ExitCode::from(err).code(),
                None => ExitCode::InternalError.code(),
            }
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success.code())
        }
        Some(Command::Test(args)) => cmd_run::run(Subcommand::Test, args),
        Some(Command::Check(args)) => cmd_run::run(Subcommand::Check, args),
        Some(Command::Completions(args)) => {
            duo::completions::write_completions(args.shell, &mut std::io::stdout().lock())?;
            Ok(ExitCode::Success.code())
        }
    }
}

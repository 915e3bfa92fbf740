// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion scripts.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;
use crate::error::Result;

/// Binary name the completion script registers for.
const BIN_NAME: &str = "duo";

/// Write the completion script for `shell` to `out`.
///
/// The script is rendered into memory first: `generate` panics on write
/// errors, so failures such as a closed pipe surface here as `Error::Output`.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let mut script = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut script);
    out.write_all(&script)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;

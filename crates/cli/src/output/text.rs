// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output: the status line and dry-run plans.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::invocation::Plan;
use crate::scope::Scope;

/// Verb leading the status line.
pub const STATUS_VERB: &str = "checking";

/// Write the status line naming the resolved scope.
///
/// Flushed immediately so it precedes any child process output.
pub fn write_status<W: WriteColor + ?Sized>(out: &mut W, scope: &Scope) -> io::Result<()> {
    out.set_color(&scheme::verb())?;
    write!(out, "{STATUS_VERB}")?;
    out.reset()?;
    write!(out, " ")?;
    out.set_color(&scheme::scope())?;
    write!(out, "{scope}")?;
    out.reset()?;
    writeln!(out)?;
    out.flush()
}

/// Write one line per planned invocation.
pub fn write_plan<W: Write + ?Sized>(out: &mut W, plan: &Plan) -> io::Result<()> {
    for invocation in plan.invocations() {
        writeln!(out, "{invocation}")?;
    }
    out.flush()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

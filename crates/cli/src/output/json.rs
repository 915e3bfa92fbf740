// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output for dry-run plans.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::{self, Write};

use serde::Serialize;

use crate::invocation::{Invocation, Plan};

/// Dry-run plan as emitted with `--output json`.
#[derive(Debug, Serialize)]
pub struct PlanOutput<'a> {
    pub subcommand: &'static str,
    pub scope: &'static str,
    pub package: Option<&'a str>,
    pub invocations: &'a [Invocation],
}

impl<'a> From<&'a Plan> for PlanOutput<'a> {
    fn from(plan: &'a Plan) -> Self {
        Self {
            subcommand: plan.subcommand.as_str(),
            scope: plan.scope.kind(),
            package: plan.scope.package(),
            invocations: plan.invocations(),
        }
    }
}

/// Write the plan as pretty-printed JSON followed by a newline.
pub fn write_plan<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &PlanOutput::from(plan))?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

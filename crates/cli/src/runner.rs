// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential dual-invocation runner.
//!
//! Prints the status line, then runs the default-features invocation and,
//! only if it succeeds, the all-features invocation. Exactly one child is
//! alive at a time.

use termcolor::WriteColor;

use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::invocation::Plan;
use crate::output::text::write_status;
use crate::verbose::VerboseLogger;

/// Exit code of one executed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub label: &'static str,
    pub exit_code: i32,
}

/// Steps that actually ran, in order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub steps: Vec<StepResult>,
}

impl RunOutcome {
    /// Exit code of the last invocation that ran.
    pub fn exit_code(&self) -> i32 {
        self.steps.last().map_or(0, |step| step.exit_code)
    }
}

/// Runs a plan through a command executor.
pub struct Runner<'a, E: CommandExecutor + ?Sized> {
    executor: &'a E,
    verbose: &'a VerboseLogger,
}

impl<'a, E: CommandExecutor + ?Sized> Runner<'a, E> {
    pub fn new(executor: &'a E, verbose: &'a VerboseLogger) -> Self {
        Self { executor, verbose }
    }

    /// Write the status line to `out`, then execute the plan.
    ///
    /// Stops at the first non-zero exit. A process that cannot be started
    /// is an error rather than a step.
    pub fn run<W: WriteColor + ?Sized>(&self, plan: &Plan, out: &mut W) -> Result<RunOutcome> {
        write_status(out, &plan.scope)?;

        let mut outcome = RunOutcome::default();
        for invocation in plan.invocations() {
            self.verbose.log(&format!("running {invocation}"));
            tracing::debug!(label = invocation.label, "running {}", invocation);

            let exit_code = self.executor.execute(invocation)?;
            self.verbose
                .log(&format!("{} exited with {}", invocation.label, exit_code));
            outcome.steps.push(StepResult {
                label: invocation.label,
                exit_code,
            });

            if exit_code != 0 {
                tracing::info!(
                    label = invocation.label,
                    exit_code,
                    "invocation failed, skipping the rest"
                );
                break;
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

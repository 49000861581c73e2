//! Current branch discovery.

use super::RefWorkflow;
use crate::error::{GitrefError, Result};
use crate::git::{Executor, RunOptions};
use std::io::Write;

/// Extract the branch name from `git status` output.
///
/// Takes the last whitespace-separated field of the first line, so
/// `On branch main` yields `main` and `HEAD detached at 1a2b3c` yields
/// `1a2b3c`.
pub fn parse_current_branch(status_stdout: &str) -> Option<&str> {
    status_stdout.lines().next()?.split_whitespace().last()
}

impl<E: Executor, W: Write> RefWorkflow<E, W> {
    /// Return the name of the checked-out branch.
    ///
    /// Runs `status` quietly; any failure is fatal.
    pub fn get_current_branch(&mut self) -> Result<String> {
        let invocation = self.invocation(&["status"]);
        let result = self.runner.run(&invocation, RunOptions::fatal(false))?;

        parse_current_branch(result.stdout())
            .map(str::to_string)
            .ok_or_else(|| {
                GitrefError::UserError(format!(
                    "could not determine the current branch from `{}` output",
                    invocation
                ))
            })
    }
}

//! Branch and tag lifecycle workflows.
//!
//! Each operation is a fixed sequence of git steps issued through a
//! [`Runner`]. Create flows capture the current branch, switch to the base
//! reference, create the new reference, optionally publish it, and switch
//! back. Every create step is fatal: the first failure is returned as
//! `GitrefError::StepFailed` and nothing after it runs. Already applied
//! steps are not rolled back.
//!
//! Delete flows run a local and an optional remote deletion, both best
//! effort.

mod branch;
mod current;
mod tag;

use crate::config::Settings;
use crate::error::Result;
use crate::git::{CommandResult, Executor, Invocation, RunOptions, Runner};
use std::io::Write;

/// Runs branch and tag workflows against one repository.
pub struct RefWorkflow<E, W> {
    runner: Runner<E, W>,
    settings: Settings,
}

impl<E: Executor, W: Write> RefWorkflow<E, W> {
    pub fn new(runner: Runner<E, W>, settings: Settings) -> Self {
        Self { runner, settings }
    }

    #[cfg(test)]
    pub fn runner(&self) -> &Runner<E, W> {
        &self.runner
    }

    /// Write a progress line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        self.runner.say(line)
    }

    fn invocation(&self, args: &[&str]) -> Invocation {
        Invocation::new(
            self.settings
                .git
                .iter()
                .map(String::as_str)
                .chain(args.iter().copied()),
        )
    }

    fn fatal(&mut self, args: &[&str]) -> Result<CommandResult> {
        let invocation = self.invocation(args);
        self.runner
            .run(&invocation, RunOptions::fatal(self.settings.verbose))
    }

    fn best_effort(&mut self, args: &[&str]) -> Result<CommandResult> {
        let invocation = self.invocation(args);
        self.runner
            .run(&invocation, RunOptions::best_effort(self.settings.verbose))
    }

    /// Shared create sequence: capture, `checkout <from>`, `create`,
    /// optional `publish`, restore.
    fn create_from(
        &mut self,
        from_ref: &str,
        create: &[&str],
        publish: Option<&[&str]>,
    ) -> Result<()> {
        let original = self.get_current_branch()?;

        self.fatal(&["checkout", from_ref])?;
        self.fatal(create)?;

        if let Some(publish) = publish {
            self.fatal(publish)?;
        }

        self.fatal(&["checkout", &original])?;
        Ok(())
    }
}

//! Branch create/delete workflows.

use super::RefWorkflow;
use crate::error::Result;
use crate::git::Executor;
use std::io::Write;

impl<E: Executor, W: Write> RefWorkflow<E, W> {
    /// Create `new_branch` from `from_ref` and return to the current branch.
    ///
    /// Steps: `status`, `checkout <from_ref>`, `checkout -b <new_branch>`,
    /// `push -u <remote> <new_branch>` when `push_remote`, then
    /// `checkout <original>`. All steps are fatal.
    pub fn create_branch(
        &mut self,
        from_ref: &str,
        new_branch: &str,
        push_remote: bool,
    ) -> Result<()> {
        let remote = self.settings.remote.clone();
        let publish = ["push", "-u", remote.as_str(), new_branch];

        self.create_from(
            from_ref,
            &["checkout", "-b", new_branch],
            push_remote.then_some(&publish[..]),
        )
    }

    /// Force-delete `branch` locally and, when `include_remote`, on the remote.
    ///
    /// Both steps are best effort; failures are only reported.
    pub fn delete_branch(&mut self, branch: &str, include_remote: bool) -> Result<()> {
        self.best_effort(&["branch", "-D", branch])?;

        if include_remote {
            let remote = self.settings.remote.clone();
            self.best_effort(&["push", &remote, "--delete", branch])?;
        }

        Ok(())
    }
}

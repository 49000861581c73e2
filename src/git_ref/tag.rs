//! Tag create/delete workflows.

use super::RefWorkflow;
use crate::error::Result;
use crate::git::Executor;
use std::io::Write;

impl<E: Executor, W: Write> RefWorkflow<E, W> {
    /// Tag `from_ref` as `tag` and return to the current branch.
    ///
    /// Steps: `status`, `checkout <from_ref>`, `tag <tag>`,
    /// `push <remote> <tag>` when `push_remote`, then `checkout <original>`.
    /// All steps are fatal.
    pub fn create_tag(&mut self, from_ref: &str, tag: &str, push_remote: bool) -> Result<()> {
        let remote = self.settings.remote.clone();
        let publish = ["push", remote.as_str(), tag];

        self.create_from(from_ref, &["tag", tag], push_remote.then_some(&publish[..]))
    }

    /// Delete `tag` locally and, when `include_remote`, on the remote.
    ///
    /// Both steps are best effort.
    pub fn delete_tag(&mut self, tag: &str, include_remote: bool) -> Result<()> {
        self.best_effort(&["tag", "-d", tag])?;

        if include_remote {
            let remote = self.settings.remote.clone();
            self.best_effort(&["push", &remote, "-d", tag])?;
        }

        Ok(())
    }
}

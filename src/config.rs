//! Runtime settings for gitref.
//!
//! There is no config file; settings come from global CLI flags and are
//! passed explicitly to the runner and every workflow operation.

use crate::error::{GitrefError, Result};
use std::path::PathBuf;

/// Default git command.
pub const DEFAULT_GIT: &str = "git";

/// Default remote name.
pub const DEFAULT_REMOTE: &str = "origin";

/// Settings shared by every step of a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program and any prefix arguments used for each git invocation.
    pub git: Vec<String>,

    /// Remote that branches and tags are published to or removed from.
    pub remote: String,

    /// Print the combined output of every state-changing step.
    pub verbose: bool,

    /// Working directory for git. `None` uses the process working directory.
    pub repo_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git: vec![DEFAULT_GIT.to_string()],
            remote: DEFAULT_REMOTE.to_string(),
            verbose: true,
            repo_dir: None,
        }
    }
}

impl Settings {
    /// Build settings from a git command string such as `git -c core.pager=cat`.
    ///
    /// The string is split with shell quoting rules.
    pub fn with_git_command(mut self, command: &str) -> Result<Self> {
        let tokens = shell_words::split(command).map_err(|e| {
            GitrefError::UserError(format!("failed to parse git command '{}': {}", command, e))
        })?;

        if tokens.is_empty() {
            return Err(GitrefError::UserError(
                "git command must not be empty".to_string(),
            ));
        }

        self.git = tokens;
        Ok(self)
    }
}

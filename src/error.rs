//! Error types for the gitref CLI.
//!
//! Uses thiserror for derive macros. A failed fatal git step is carried as
//! `StepFailed` so `main` can exit with the child's own status.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gitref operations.
#[derive(Error, Debug)]
pub enum GitrefError {
    /// Invalid configuration or unexpected output from git.
    #[error("{0}")]
    UserError(String),

    /// The git program could not be started at all.
    #[error("failed to execute {program}: {source} (is git installed?)")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A step that must succeed exited non-zero.
    #[error("`{command}` failed with exit code {code}")]
    StepFailed { command: String, code: i32 },

    /// Progress or step output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl GitrefError {
    /// Returns the process exit code for this error.
    ///
    /// `StepFailed` propagates the child's status verbatim.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitrefError::UserError(_) => exit_codes::USER_ERROR,
            GitrefError::Spawn { .. } => exit_codes::USER_ERROR,
            GitrefError::StepFailed { code, .. } => *code,
            GitrefError::Output(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for gitref operations.
pub type Result<T> = std::result::Result<T, GitrefError>;

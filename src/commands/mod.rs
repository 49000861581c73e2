//! Command dispatch for gitref.
//!
//! Routes a [`WorkflowRequest`] to the matching workflow, printing the
//! progress lines around it.

use crate::cli::Cli;
use crate::error::Result;
use crate::git::{Executor, ProcessExecutor, Runner};
use crate::git_ref::RefWorkflow;
use std::io::{self, Write};

/// Which workflow to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    CreateBranch,
    DeleteBranch,
    CreateTag,
    DeleteTag,
}

/// One parsed invocation of the program.
///
/// `source` is the base reference for creates and the branch to delete for
/// `DeleteBranch`; `target` is the new branch or the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowRequest {
    pub kind: OperationKind,
    pub source: String,
    pub target: String,
    pub remote: bool,
}

/// Run the parsed CLI against real git, writing to stdout.
pub fn execute(cli: Cli) -> Result<()> {
    let settings = cli.settings()?;
    let request = cli.command.into_request();

    let executor = ProcessExecutor::new(settings.repo_dir.clone());
    let mut workflow = RefWorkflow::new(Runner::new(executor, io::stdout()), settings);

    dispatch(&mut workflow, &request)
}

/// Dispatch a request to its workflow.
pub fn dispatch<E: Executor, W: Write>(
    workflow: &mut RefWorkflow<E, W>,
    request: &WorkflowRequest,
) -> Result<()> {
    let source = request.source.as_str();
    let target = request.target.as_str();

    match request.kind {
        OperationKind::CreateBranch => {
            workflow.say(&format!("Creating branch {} based on {}", target, source))?;
            workflow.create_branch(source, target, request.remote)?;
        }
        OperationKind::DeleteBranch => {
            workflow.say(&format!("Deleting branch {}", source))?;
            workflow.delete_branch(source, request.remote)?;
        }
        OperationKind::CreateTag => {
            workflow.say(&format!("Creating tag {} on {}", target, source))?;
            workflow.create_tag(source, target, request.remote)?;
        }
        OperationKind::DeleteTag => {
            workflow.say(&format!("Deleting tag {} on {}", target, source))?;
            workflow.delete_tag(target, request.remote)?;
        }
    }

    workflow.say("Done.")
}

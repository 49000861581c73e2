//! CLI argument parsing for gitref.
//!
//! Uses clap derive macros for declarative argument definitions. The parsed
//! command is turned into a [`WorkflowRequest`]; execution lives in the
//! `commands` module.

use crate::commands::{OperationKind, WorkflowRequest};
use crate::config::{DEFAULT_GIT, DEFAULT_REMOTE, Settings};
use crate::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// gitref: create and delete git branches and tags, optionally on the remote.
///
/// Create operations remember the checked-out branch and switch back to it
/// when done.
#[derive(Parser, Debug)]
#[command(name = "gitref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run git in DIR instead of the current directory.
    #[arg(short = 'C', global = true, value_name = "DIR")]
    pub repo_dir: Option<PathBuf>,

    /// Git command to run, split with shell quoting rules.
    #[arg(long, global = true, default_value = DEFAULT_GIT)]
    pub git: String,

    /// Remote to publish to or delete from.
    #[arg(long, global = true, default_value = DEFAULT_REMOTE)]
    pub remote_name: String,

    /// Do not print the output of each git step.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for gitref.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create/delete branch.
    Branch(BranchArgs),

    /// Create/delete tag.
    Tag(TagArgs),
}

/// What to do with the reference.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Delete,
}

/// Arguments for the `branch` command.
#[derive(Parser, Debug)]
pub struct BranchArgs {
    pub action: Action,

    /// Include or push to remote.
    #[arg(short = 'R', long)]
    pub remote: bool,

    /// From branch, or the branch to delete.
    #[arg(short, long)]
    pub from: Option<String>,

    /// New branch when creating.
    #[arg(short, long)]
    pub to: Option<String>,
}

/// Arguments for the `tag` command.
#[derive(Parser, Debug)]
pub struct TagArgs {
    pub action: Action,

    /// Tag to create or delete.
    #[arg(long)]
    pub tag: Option<String>,

    /// Reference to tag when creating.
    #[arg(short, long)]
    pub from: Option<String>,

    /// Include or push to remote.
    #[arg(short = 'R', long)]
    pub remote: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Settings from the global flags.
    pub fn settings(&self) -> Result<Settings> {
        let settings = Settings {
            remote: self.remote_name.clone(),
            verbose: !self.quiet,
            repo_dir: self.repo_dir.clone(),
            ..Settings::default()
        };
        settings.with_git_command(&self.git)
    }
}

impl Command {
    /// Convert to a request. Missing references become empty strings and are
    /// left for git to reject.
    pub fn into_request(self) -> WorkflowRequest {
        match self {
            Command::Branch(args) => WorkflowRequest {
                kind: match args.action {
                    Action::Create => OperationKind::CreateBranch,
                    Action::Delete => OperationKind::DeleteBranch,
                },
                source: args.from.unwrap_or_default(),
                target: args.to.unwrap_or_default(),
                remote: args.remote,
            },
            Command::Tag(args) => WorkflowRequest {
                kind: match args.action {
                    Action::Create => OperationKind::CreateTag,
                    Action::Delete => OperationKind::DeleteTag,
                },
                source: args.from.unwrap_or_default(),
                target: args.tag.unwrap_or_default(),
                remote: args.remote,
            },
        }
    }
}

//! Git command runner for gitref.
//!
//! Every git step goes through [`Runner::run`]. A non-zero exit is a normal
//! [`CommandResult::Failure`], not an error; only steps run with
//! `exit_on_failure` turn it into [`GitrefError::StepFailed`].

use crate::error::{GitrefError, Result};
use crate::exit_codes;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Program name plus arguments for one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Program to execute (first token).
    pub fn program(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or("")
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_words::join(&self.tokens))
    }
}

/// Text captured from a child's standard streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Success(CapturedOutput),
    Failure { code: i32, output: CapturedOutput },
}

impl CommandResult {
    fn from_output(output: &Output) -> Self {
        let captured = CapturedOutput::from_output(output);
        if output.status.success() {
            CommandResult::Success(captured)
        } else {
            CommandResult::Failure {
                code: output.status.code().unwrap_or(exit_codes::NO_STATUS),
                output: captured,
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandResult::Success(_))
    }

    /// Exit status; 0 on success.
    pub fn code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => exit_codes::SUCCESS,
            CommandResult::Failure { code, .. } => *code,
        }
    }

    pub fn output(&self) -> &CapturedOutput {
        match self {
            CommandResult::Success(output) => output,
            CommandResult::Failure { output, .. } => output,
        }
    }

    pub fn stdout(&self) -> &str {
        &self.output().stdout
    }

    /// Non-empty streams joined by a newline, stdout first.
    pub fn combined(&self) -> String {
        let output = self.output();
        [output.stdout.as_str(), output.stderr.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs an invocation to completion.
///
/// `Err` is reserved for invocations that could not run at all.
pub trait Executor {
    fn execute(&mut self, invocation: &Invocation) -> Result<CommandResult>;
}

/// Executes invocations as real child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    cwd: Option<PathBuf>,
}

impl ProcessExecutor {
    pub fn new(cwd: Option<PathBuf>) -> Self {
        Self { cwd }
    }
}

impl Executor for ProcessExecutor {
    fn execute(&mut self, invocation: &Invocation) -> Result<CommandResult> {
        if invocation.program().is_empty() {
            return Err(GitrefError::UserError(
                "cannot run an empty command".to_string(),
            ));
        }

        let mut command = Command::new(invocation.program());
        command.args(invocation.args());
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }

        let output = command.output().map_err(|e| GitrefError::Spawn {
            program: invocation.program().to_string(),
            source: e,
        })?;

        Ok(CommandResult::from_output(&output))
    }
}

/// Per-call policy for [`Runner::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write the combined output of the step, whatever its outcome.
    pub verbose: bool,
    /// Treat a non-zero exit as `GitrefError::StepFailed`.
    pub exit_on_failure: bool,
}

impl RunOptions {
    /// A step that must succeed.
    pub fn fatal(verbose: bool) -> Self {
        Self {
            verbose,
            exit_on_failure: true,
        }
    }

    /// A step whose failure is reported and ignored.
    pub fn best_effort(verbose: bool) -> Self {
        Self {
            verbose,
            exit_on_failure: false,
        }
    }
}

/// Runs invocations and writes step output to a sink (stdout in `main`).
pub struct Runner<E, W> {
    executor: E,
    out: W,
}

impl<E: Executor, W: Write> Runner<E, W> {
    pub fn new(executor: E, out: W) -> Self {
        Self { executor, out }
    }

    /// Run one invocation synchronously.
    ///
    /// # Returns
    ///
    /// * `Ok(CommandResult)` - The child ran; check `is_success()` for best-effort steps
    /// * `Err(GitrefError::StepFailed)` - Non-zero exit with `exit_on_failure` set
    /// * `Err(GitrefError::Spawn)` - The program could not be started
    pub fn run(&mut self, invocation: &Invocation, options: RunOptions) -> Result<CommandResult> {
        let result = self.executor.execute(invocation)?;

        if options.verbose {
            self.say(&result.combined())?;
        }

        if options.exit_on_failure && !result.is_success() {
            return Err(GitrefError::StepFailed {
                command: invocation.to_string(),
                code: result.code(),
            });
        }

        Ok(result)
    }

    /// Write one line to the output sink.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

use crate::error::Result;
use crate::git::{CapturedOutput, CommandResult, Executor, Invocation};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn captured(stdout: &str, stderr: &str) -> CapturedOutput {
    CapturedOutput {
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}

/// Fake executor keyed by the space-joined arguments (program excluded).
///
/// Unscripted `status` reports `main` as the current branch; any other
/// unscripted invocation succeeds with no output.
#[derive(Debug, Default)]
pub(crate) struct ScriptedExecutor {
    responses: HashMap<String, CommandResult>,
    calls: Vec<String>,
}

impl ScriptedExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, args: &str, stdout: &str, stderr: &str) -> Self {
        self.responses.insert(
            args.to_string(),
            CommandResult::Success(captured(stdout, stderr)),
        );
        self
    }

    pub(crate) fn fail(mut self, args: &str, code: i32, stderr: &str) -> Self {
        self.responses.insert(
            args.to_string(),
            CommandResult::Failure {
                code,
                output: captured("", stderr),
            },
        );
        self
    }

    /// Arguments of every executed invocation, in order.
    pub(crate) fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl Executor for ScriptedExecutor {
    fn execute(&mut self, invocation: &Invocation) -> Result<CommandResult> {
        let key = invocation.args().join(" ");
        self.calls.push(key.clone());

        if let Some(result) = self.responses.get(&key) {
            return Ok(result.clone());
        }

        let stdout = if key == "status" {
            "On branch main\nnothing to commit, working tree clean\n"
        } else {
            ""
        };
        Ok(CommandResult::Success(captured(stdout, "")))
    }
}

/// A working repository plus the bare repository registered as `origin`.
pub(crate) struct RepoWithRemote {
    pub(crate) repo: TempDir,
    pub(crate) remote: TempDir,
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    // A second branch with its own commit, used as a `from` reference.
    git(path, &["checkout", "-b", "develop"]);
    std::fs::write(path.join("develop.txt"), "develop\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Develop commit"]);
    git(path, &["checkout", "main"]);

    temp_dir
}

pub(crate) fn create_test_repo_with_remote() -> RepoWithRemote {
    let repo = create_test_repo();
    let remote = TempDir::new().unwrap();

    git(remote.path(), &["init", "--bare"]);
    let remote_str = remote.path().to_string_lossy().to_string();
    git(repo.path(), &["remote", "add", "origin", &remote_str]);
    git(repo.path(), &["push", "origin", "main"]);

    RepoWithRemote { repo, remote }
}

/// Run git in `repo_dir`, returning trimmed stdout. Panics on failure.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Returns true if `git show-ref --verify` finds `full_ref` in `repo_dir`.
pub(crate) fn ref_exists(repo_dir: &Path, full_ref: &str) -> bool {
    Command::new("git")
        .current_dir(repo_dir)
        .args(["show-ref", "--verify", "--quiet", full_ref])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

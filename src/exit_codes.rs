//! Exit code constants for the gitref CLI.
//!
//! - 0: Success
//! - 1: User error (bad `--git` value, unreadable status, git not runnable)
//! - 2: Argument error (reported by clap)
//!
//! A failed fatal git step exits with that step's own exit code instead.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration, unusable git, or unexpected git output.
pub const USER_ERROR: i32 = 1;

/// Used when the child exited without a status code (killed by a signal).
pub const NO_STATUS: i32 = -1;

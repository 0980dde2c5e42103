//! Live child-process execution for install and hook-activation commands.

use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

/// Run a command line with stdio inherited, so its output streams straight to
/// the user's terminal, and return its exit code.
///
/// A failure to start the process at all (missing executable, PATH problem)
/// is an `Err`, distinct from a non-zero exit code: the former means the
/// operation never ran, and callers must not treat it as a tool failure with
/// an exit status.
#[instrument(skip_all, fields(command = command_line))]
pub fn run_live(command_line: &str) -> Result<i32> {
    let mut parts = command_line.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow!("empty command line"))?;

    debug!("spawning child process");
    let status = Command::new(program)
        .args(parts)
        .status()
        .with_context(|| format!("spawn {program}"))?;

    debug!(exit_code = ?status.code(), "command finished");
    status
        .code()
        .ok_or_else(|| anyhow!("'{command_line}' was terminated by a signal"))
}

//! Script execution.
//!
//! Runs the chosen script as a child process. The child inherits the
//! terminal, so scripts that prompt for input keep working.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use super::interpreter::Interpreter;
use crate::error::{Result, SmenuError};
use crate::script::ScriptEntry;

/// Environment variable holding the running script's path.
pub const SCRIPT_PATH_ENV: &str = "SMENU_SCRIPT";

/// Environment variable holding the running script's file stem.
pub const SCRIPT_NAME_ENV: &str = "SMENU_SCRIPT_NAME";

/// Result of script execution.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Script that was run.
    pub path: PathBuf,
    /// Exit status of the script.
    pub status: ExitStatus,
    /// The command that was executed.
    pub command: String,
}

impl ExecutionResult {
    /// Check if the execution was successful.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get the exit code.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Turn an unsuccessful exit into an error naming the script.
    ///
    /// # Errors
    ///
    /// Returns [`SmenuError::ScriptFailed`] for a non-zero exit code and
    /// [`SmenuError::ScriptTerminated`] when the script was killed.
    pub fn into_result(self) -> Result<()> {
        if self.success() {
            return Ok(());
        }
        match self.code() {
            Some(code) => Err(SmenuError::ScriptFailed {
                path: self.path,
                code,
            }),
            None => Err(SmenuError::ScriptTerminated { path: self.path }),
        }
    }
}

/// Execute a script with the given interpreter.
///
/// This is the low-level execution function that spawns the process.
///
/// # Arguments
///
/// * `entry` - The script to run
/// * `interpreter` - Program used to run it
/// * `work_dir` - Working directory for the child
///
/// # Errors
///
/// Returns an error if the script fails to spawn. A script that runs and
/// exits non-zero is not an error here; see [`ExecutionResult::into_result`].
pub fn execute_script(
    entry: &ScriptEntry,
    interpreter: &Interpreter,
    work_dir: &Path,
) -> Result<ExecutionResult> {
    let command_str = interpreter.format_command(entry.path());

    let mut command = interpreter.build_command(entry.path());
    command.current_dir(work_dir);
    command.env(SCRIPT_PATH_ENV, entry.path());
    command.env(SCRIPT_NAME_ENV, entry.stem());

    // Inherit stdio for interactive scripts
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    tracing::debug!(command = %command_str, unit = entry.stem(), "spawning script");

    let status = command.status().map_err(|source| SmenuError::ScriptSpawn {
        path: entry.path().to_path_buf(),
        source,
    })?;

    tracing::debug!(?status, unit = entry.stem(), "script finished");

    Ok(ExecutionResult {
        path: entry.path().to_path_buf(),
        status,
        command: command_str,
    })
}

/// Format a command for display in dry-run mode.
pub fn format_dry_run_command(entry: &ScriptEntry, interpreter: &Interpreter) -> String {
    format!("Would run: {}", interpreter.format_command(entry.path()))
}

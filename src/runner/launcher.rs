//! The dispatch boundary between the menu and the chosen script.

use std::path::PathBuf;

use super::executor::{execute_script, format_dry_run_command};
use super::interpreter::Interpreter;
use crate::error::Result;
use crate::script::ScriptEntry;

/// What a successful launch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The script ran and exited successfully.
    Completed,
    /// Nothing ran; `command` is the line to show instead.
    Previewed { command: String },
}

/// Something that can run a selected script.
///
/// Every failure of the script itself comes back as an `Err`; nothing the
/// script does may panic or abort the menu process.
pub trait ScriptLauncher {
    fn launch(&mut self, entry: &ScriptEntry) -> Result<LaunchOutcome>;
}

/// Runs scripts as child processes.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    interpreter: Interpreter,
    work_dir: PathBuf,
    dry_run: bool,
}

impl ProcessLauncher {
    /// Create a launcher that runs scripts with `interpreter` inside `work_dir`.
    pub fn new(interpreter: Interpreter, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            interpreter,
            work_dir: work_dir.into(),
            dry_run: false,
        }
    }

    /// Print commands instead of running them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The interpreter in use.
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl ScriptLauncher for ProcessLauncher {
    fn launch(&mut self, entry: &ScriptEntry) -> Result<LaunchOutcome> {
        if self.dry_run {
            return Ok(LaunchOutcome::Previewed {
                command: format_dry_run_command(entry, &self.interpreter),
            });
        }

        execute_script(entry, &self.interpreter, &self.work_dir)?.into_result()?;
        Ok(LaunchOutcome::Completed)
    }
}

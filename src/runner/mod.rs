//! Runner module for smenu.
//!
//! Handles running the chosen script with the right interpreter.

mod executor;
mod interpreter;
mod launcher;

pub use executor::{
    execute_script, format_dry_run_command, ExecutionResult, SCRIPT_NAME_ENV, SCRIPT_PATH_ENV,
};
pub use interpreter::{builtin_interpreter, Interpreter};
pub use launcher::{LaunchOutcome, ProcessLauncher, ScriptLauncher};

//! Custom error types for smenu.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::script::HeaderError;

/// Exit codes for smenu.
///
/// Workflow errors (no scripts, bad selection, failed script) only map to
/// these codes in strict mode; otherwise the run ends with `SUCCESS`.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Script directory missing or not a directory.
    pub const NO_DIRECTORY: i32 = 2;
    /// No scripts found.
    pub const NO_SCRIPTS: i32 = 3;
    /// Script execution failed.
    pub const SCRIPT_FAILED: i32 = 4;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
    /// Invalid menu selection.
    pub const INVALID_SELECTION: i32 = 6;
}

/// Main error type for smenu.
#[derive(Error, Debug)]
pub enum SmenuError {
    /// Script directory does not exist.
    #[error("Script directory not found: {path}\n\nTip: Pass a directory as the first argument or set SMENU_DIR.")]
    DirectoryNotFound { path: PathBuf },

    /// Script directory path names something other than a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// No matching scripts in the directory.
    #[error("No scripts found in the directory.")]
    EmptyDirectory { path: PathBuf, extension: String },

    /// Menu selection was not a number.
    #[error("Invalid input. Please enter a valid number.")]
    InvalidInput { input: String },

    /// Menu selection was outside the listed range.
    #[error("Invalid choice.")]
    InvalidChoice { choice: i64, max: usize },

    /// A script header could not be parsed.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// Script exited with a non-zero code.
    #[error("An error occurred while running {path}: exited with code {code}")]
    ScriptFailed { path: PathBuf, code: i32 },

    /// Script was killed before it could exit.
    #[error("An error occurred while running {path}: terminated by signal")]
    ScriptTerminated { path: PathBuf },

    /// Script could not be started at all.
    #[error("An error occurred while running {path}: {source}")]
    ScriptSpawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interpreter command line could not be split.
    #[error("Invalid interpreter command '{command}': {message}")]
    InvalidInterpreter { command: String, message: String },

    /// Exclude pattern is not a valid glob.
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SmenuError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SmenuError::DirectoryNotFound { .. } => exit_code::NO_DIRECTORY,
            SmenuError::NotADirectory { .. } => exit_code::NO_DIRECTORY,
            SmenuError::EmptyDirectory { .. } => exit_code::NO_SCRIPTS,
            SmenuError::InvalidInput { .. } => exit_code::INVALID_SELECTION,
            SmenuError::InvalidChoice { .. } => exit_code::INVALID_SELECTION,
            SmenuError::Header(_) => exit_code::GENERAL_ERROR,
            SmenuError::ScriptFailed { .. } => exit_code::SCRIPT_FAILED,
            SmenuError::ScriptTerminated { .. } => exit_code::SCRIPT_FAILED,
            SmenuError::ScriptSpawn { .. } => exit_code::SCRIPT_FAILED,
            SmenuError::InvalidInterpreter { .. } => exit_code::INVALID_CONFIG,
            SmenuError::InvalidPattern { .. } => exit_code::INVALID_CONFIG,
            SmenuError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            SmenuError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            SmenuError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Whether this error comes from the menu workflow itself rather than
    /// from startup.
    ///
    /// Workflow errors end the run normally unless strict mode is on.
    pub fn is_workflow(&self) -> bool {
        matches!(
            self,
            SmenuError::EmptyDirectory { .. }
                | SmenuError::InvalidInput { .. }
                | SmenuError::InvalidChoice { .. }
                | SmenuError::ScriptFailed { .. }
                | SmenuError::ScriptTerminated { .. }
                | SmenuError::ScriptSpawn { .. }
        )
    }

    /// Whether this error is a rejected menu selection.
    pub fn is_invalid_selection(&self) -> bool {
        matches!(
            self,
            SmenuError::InvalidInput { .. } | SmenuError::InvalidChoice { .. }
        )
    }

    /// Exit code to report for this error given the strictness setting.
    pub fn exit_code_for(&self, strict: bool) -> i32 {
        if self.is_workflow() && !strict {
            exit_code::SUCCESS
        } else {
            self.exit_code()
        }
    }
}

/// Result type alias for smenu operations.
pub type Result<T> = std::result::Result<T, SmenuError>;

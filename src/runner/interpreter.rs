//! Interpreter selection and command building.
//!
//! Picks the program that runs a script, in priority order:
//! 1. `--interpreter` on the command line
//! 2. `[runner.interpreters]` in config, keyed by extension
//! 3. Built-in defaults for common script types
//! 4. Execute the file directly

use std::path::Path;
use std::process::Command;

use crate::config::Config;
use crate::error::{Result, SmenuError};

/// Built-in interpreters by extension.
const BUILTIN_INTERPRETERS: &[(&str, &str)] = &[
    ("py", "python3"),
    ("sh", "sh"),
    ("bash", "bash"),
    ("zsh", "zsh"),
    ("rb", "ruby"),
    ("pl", "perl"),
    ("js", "node"),
    ("lua", "lua"),
];

/// Look up the built-in interpreter for an extension.
pub fn builtin_interpreter(extension: &str) -> Option<&'static str> {
    let extension = extension.trim_start_matches('.');
    BUILTIN_INTERPRETERS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, cmd)| *cmd)
}

/// The program (plus leading arguments) used to run a script.
///
/// An empty command means the script is executed directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpreter {
    command: Vec<String>,
}

impl Interpreter {
    /// Execute scripts directly, without an interpreter.
    pub fn direct() -> Self {
        Self::default()
    }

    /// Parse an interpreter command line such as `python3 -u`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command line has unbalanced quotes.
    ///
    /// # Examples
    ///
    /// ```
    /// use smenu::runner::Interpreter;
    ///
    /// let interp = Interpreter::parse("python3 -X utf8").unwrap();
    /// assert_eq!(interp.program(), Some("python3"));
    /// ```
    pub fn parse(command: &str) -> Result<Self> {
        let words = shell_words::split(command).map_err(|e| SmenuError::InvalidInterpreter {
            command: command.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { command: words })
    }

    /// Resolve the interpreter for an extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen command line cannot be parsed.
    pub fn resolve(extension: &str, config: &Config, cli_override: Option<&str>) -> Result<Self> {
        let chosen = cli_override
            .or_else(|| config.interpreter_for(extension))
            .or_else(|| builtin_interpreter(extension));

        let interpreter = match chosen {
            Some(cmd) => Self::parse(cmd)?,
            None => Self::direct(),
        };

        tracing::debug!(extension, ?interpreter, "resolved interpreter");
        Ok(interpreter)
    }

    /// The interpreter program, or `None` for direct execution.
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Whether scripts run without an interpreter.
    pub fn is_direct(&self) -> bool {
        self.command.is_empty()
    }

    /// The full argument vector that runs `script`.
    pub fn command_line(&self, script: &Path) -> Vec<String> {
        let mut parts = self.command.clone();
        parts.push(script.to_string_lossy().into_owned());
        parts
    }

    /// Format the command line for display, quoting where needed.
    pub fn format_command(&self, script: &Path) -> String {
        shell_words::join(self.command_line(script))
    }

    /// Build a [`Command`] that runs `script`.
    pub fn build_command(&self, script: &Path) -> Command {
        match self.command.split_first() {
            Some((program, args)) => {
                let mut command = Command::new(program);
                command.args(args).arg(script);
                command
            }
            None => Command::new(script),
        }
    }
}

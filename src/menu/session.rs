//! One pass of the menu: show the scripts, take a choice, run it.
//!
//! ```text
//! Start → (no scripts? → report) → Render → Prompt → (invalid? → report)
//!       → Launch → End
//! ```

use std::io::{Read, Write};
use std::path::PathBuf;

use super::prompt::{parse_selection, read_selection};
use super::render::render_menu;
use crate::config::DEFAULT_TITLE;
use crate::error::{Result, SmenuError};
use crate::runner::{LaunchOutcome, ScriptLauncher};
use crate::script::Catalog;

/// A single interactive run over a catalog.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    script_dir: PathBuf,
    extension: String,
    title: String,
    preselected: Option<String>,
}

impl<'a> Session<'a> {
    /// Create a session over scripts found in `script_dir`.
    pub fn new(catalog: &'a Catalog, script_dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            catalog,
            script_dir: script_dir.into(),
            extension: extension.to_string(),
            title: DEFAULT_TITLE.to_string(),
            preselected: None,
        }
    }

    /// Set the line shown above the options.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Answer the prompt up front instead of reading input.
    pub fn preselect(mut self, choice: Option<String>) -> Self {
        self.preselected = choice;
        self
    }

    /// Run the session.
    ///
    /// Returns the 1-based number of the script that was launched.
    ///
    /// # Errors
    ///
    /// - [`SmenuError::EmptyDirectory`] when there is nothing to show
    /// - [`SmenuError::InvalidInput`] / [`SmenuError::InvalidChoice`] for a
    ///   rejected choice; nothing is launched
    /// - whatever the launcher reports for a failed script
    pub fn run<R, W, L>(&self, input: &mut R, output: &mut W, launcher: &mut L) -> Result<usize>
    where
        R: Read,
        W: Write,
        L: ScriptLauncher + ?Sized,
    {
        if self.catalog.is_empty() {
            return Err(SmenuError::EmptyDirectory {
                path: self.script_dir.clone(),
                extension: self.extension.clone(),
            });
        }

        write!(
            output,
            "\n\n{}\n",
            render_menu(&self.title, self.catalog.as_slice())
        )?;

        let count = self.catalog.len();
        let choice = match &self.preselected {
            Some(answer) => parse_selection(answer, count)?,
            None => read_selection(input, output, count)?,
        };

        // parse_selection only returns numbers in 1..=count
        let entry = self.catalog.get(choice).ok_or(SmenuError::InvalidChoice {
            choice: choice as i64,
            max: count,
        })?;

        tracing::info!(choice, path = %entry.path().display(), "dispatching script");
        writeln!(output, "Running {}...\n", entry.path().display())?;
        output.flush()?;

        if let LaunchOutcome::Previewed { command } = launcher.launch(entry)? {
            writeln!(output, "{command}")?;
        }
        Ok(choice)
    }
}

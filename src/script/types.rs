//! Type definitions for discovered scripts.

use std::fmt;
use std::path::{Path, PathBuf};

use super::header::{Header, HeaderError};

/// One menu option: a script file and its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    path: PathBuf,
    stem: String,
    name: String,
    description: String,
}

impl ScriptEntry {
    /// Create an entry from a path and an extracted header.
    pub fn new(path: impl Into<PathBuf>, header: Header) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            stem,
            name: header.name,
            description: header.description,
        }
    }

    /// Create an entry with no header metadata.
    pub fn bare(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Header::default())
    }

    /// Path of the script file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without extension; identifies the unit when it runs.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Display name from the header, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description from the header, possibly empty.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ScriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}

/// The ordered scripts of one directory, plus any header problems hit while
/// reading them.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<ScriptEntry>,
    problems: Vec<HeaderError>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a vector of entries.
    pub fn from_entries(entries: Vec<ScriptEntry>) -> Self {
        Self {
            entries,
            problems: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn add(&mut self, entry: ScriptEntry) {
        self.entries.push(entry);
    }

    /// Record a header problem.
    pub fn add_problem(&mut self, problem: HeaderError) {
        self.problems.push(problem);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.entries.iter()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[ScriptEntry] {
        &self.entries
    }

    /// Get an entry by its 1-based menu number.
    pub fn get(&self, number: usize) -> Option<&ScriptEntry> {
        number
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
    }

    /// Header problems, one per affected file.
    pub fn problems(&self) -> &[HeaderError] {
        &self.problems
    }
}

//! Script discovery in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use super::header::{extract_header, HeaderMarkers};
use super::types::{Catalog, ScriptEntry};
use crate::config::SortMode;
use crate::error::{Result, SmenuError};

/// How to pick scripts out of a directory.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Script extension, with or without the leading dot.
    pub extension: String,
    /// Menu ordering.
    pub sort: SortMode,
    /// Glob patterns matched against file names to leave out.
    pub exclude: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extension: "py".to_string(),
            sort: SortMode::default(),
            exclude: Vec::new(),
        }
    }
}

impl DiscoveryOptions {
    /// The `.ext` suffix a file name must end with.
    fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

/// Compile exclude patterns.
///
/// # Errors
///
/// Returns an error naming the first pattern that is not a valid glob.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| SmenuError::InvalidPattern {
                pattern: p.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// List the script files in `dir`.
///
/// Only regular files whose name ends with the configured extension are
/// returned. With [`SortMode::Name`] the result is sorted by file name;
/// with [`SortMode::Listing`] it keeps the order the OS returned.
///
/// # Errors
///
/// Returns an error if the directory does not exist, is not a directory,
/// cannot be read, or an exclude pattern is invalid.
pub fn discover_scripts(dir: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(SmenuError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(SmenuError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let suffix = options.suffix();
    let exclude = compile_patterns(&options.exclude)?;

    let read_dir = fs::read_dir(dir).map_err(|source| SmenuError::IoWithContext {
        operation: "read directory".to_string(),
        path: dir.to_path_buf(),
        source,
    })?;

    let mut scripts = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| SmenuError::IoWithContext {
            operation: "read directory".to_string(),
            path: dir.to_path_buf(),
            source,
        })?;

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if !file_name.ends_with(&suffix) {
            continue;
        }

        let path = entry.path();
        // Follows symlinks, so a link to a script still counts
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        if exclude.iter().any(|p| p.matches(&file_name)) {
            tracing::debug!(path = %path.display(), "excluded by pattern");
            continue;
        }

        scripts.push(path);
    }

    if options.sort == SortMode::Name {
        scripts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    tracing::debug!(
        dir = %dir.display(),
        count = scripts.len(),
        "discovered scripts"
    );

    Ok(scripts)
}

/// Read headers for every path and build the menu catalog.
///
/// A file whose header cannot be parsed stays in the catalog with empty
/// name and description; the error is kept in [`Catalog::problems`].
pub fn load_catalog(paths: Vec<PathBuf>, markers: &HeaderMarkers) -> Catalog {
    let mut catalog = Catalog::new();

    for path in paths {
        match extract_header(&path, markers) {
            Ok(header) => catalog.add(ScriptEntry::new(path, header)),
            Err(err) => {
                tracing::debug!(error = %err, "unreadable script header");
                catalog.add(ScriptEntry::bare(path));
                catalog.add_problem(err);
            }
        }
    }

    catalog
}

//! Script header extraction.
//!
//! A script describes itself in its first block of lines (everything up to
//! the first blank line) using two marker lines:
//!
//! ```text
//! # SCRIPT_NAME: [Backup photos]
//! # SCRIPT_INFO: [Sync ~/Pictures to the NAS]
//! ```
//!
//! Only the span between the first `[` and the first `]` after it is kept,
//! trimmed of whitespace. Anything between the marker and the `[` is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default marker for the display name line.
pub const DEFAULT_NAME_MARKER: &str = "# SCRIPT_NAME:";

/// Default marker for the description line.
pub const DEFAULT_INFO_MARKER: &str = "# SCRIPT_INFO:";

/// A header line that could not be parsed.
#[derive(Error, Debug)]
pub enum HeaderError {
    /// Marker present but no `[` follows it.
    #[error("{path}:{line}: expected '[' after '{marker}'")]
    Unopened {
        path: PathBuf,
        line: usize,
        marker: String,
    },

    /// `[` present but never closed.
    #[error("{path}:{line}: missing ']' after '{marker}'")]
    Unclosed {
        path: PathBuf,
        line: usize,
        marker: String,
    },

    /// The file could not be read.
    #[error("Failed to read header of {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HeaderError {
    /// The script the error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            HeaderError::Unopened { path, .. }
            | HeaderError::Unclosed { path, .. }
            | HeaderError::Read { path, .. } => path,
        }
    }
}

/// The two marker prefixes recognized in a header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMarkers {
    /// Prefix of the display name line.
    pub name_marker: String,
    /// Prefix of the description line.
    pub info_marker: String,
}

impl Default for HeaderMarkers {
    fn default() -> Self {
        Self {
            name_marker: DEFAULT_NAME_MARKER.to_string(),
            info_marker: DEFAULT_INFO_MARKER.to_string(),
        }
    }
}

/// Display metadata extracted from a script header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Display name, empty if the marker is absent.
    pub name: String,
    /// Description, empty if the marker is absent.
    pub description: String,
}

/// Which bracket was missing on a marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BracketFault {
    Open,
    Close,
}

/// Extract the trimmed text between the first `[` and the next `]`.
fn bracketed(rest: &str) -> Result<&str, BracketFault> {
    let open = rest.find('[').ok_or(BracketFault::Open)?;
    let after = &rest[open + 1..];
    let close = after.find(']').ok_or(BracketFault::Close)?;
    Ok(after[..close].trim())
}

/// Parse a header from any line-oriented reader.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns an error if a marker line has no bracketed value, or if reading
/// fails (including invalid UTF-8).
pub fn parse_header<R: BufRead>(
    reader: R,
    path: &Path,
    markers: &HeaderMarkers,
) -> Result<Header, HeaderError> {
    let mut header = Header::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| HeaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (marker, rest, slot) = if let Some(rest) = line.strip_prefix(&markers.name_marker) {
            (&markers.name_marker, rest, &mut header.name)
        } else if let Some(rest) = line.strip_prefix(&markers.info_marker) {
            (&markers.info_marker, rest, &mut header.description)
        } else if line.trim().is_empty() {
            break;
        } else {
            continue;
        };

        match bracketed(rest) {
            Ok(value) => *slot = value.to_string(),
            Err(fault) => {
                let path = path.to_path_buf();
                let line = idx + 1;
                let marker = marker.clone();
                return Err(match fault {
                    BracketFault::Open => HeaderError::Unopened { path, line, marker },
                    BracketFault::Close => HeaderError::Unclosed { path, line, marker },
                });
            }
        }
    }

    Ok(header)
}

/// Open a script file and extract its header.
///
/// # Errors
///
/// See [`parse_header`]; also fails if the file cannot be opened.
pub fn extract_header(path: &Path, markers: &HeaderMarkers) -> Result<Header, HeaderError> {
    let file = File::open(path).map_err(|source| HeaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let header = parse_header(BufReader::new(file), path, markers)?;
    tracing::debug!(
        path = %path.display(),
        name = %header.name,
        description = %header.description,
        "extracted script header"
    );
    Ok(header)
}

//! Script module for smenu.
//!
//! Handles finding script files in a directory and reading their headers.

mod discovery;
pub mod header;
mod types;

pub use discovery::{compile_patterns, discover_scripts, load_catalog, DiscoveryOptions};
pub use header::{
    extract_header, parse_header, Header, HeaderError, HeaderMarkers, DEFAULT_INFO_MARKER,
    DEFAULT_NAME_MARKER,
};
pub use types::{Catalog, ScriptEntry};

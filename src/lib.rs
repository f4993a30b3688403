//! smenu - Script Menu
//!
//! Scans a directory for script files, reads a two-line header from each
//! one, shows them as a numbered menu and runs the one you pick.
//!
//! # Header convention
//!
//! ```text
//! # SCRIPT_NAME: [Backup photos]
//! # SCRIPT_INFO: [Sync ~/Pictures to the NAS]
//! ```
//!
//! Both lines must appear before the first blank line of the file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and exit codes
//! - [`menu`] - Menu rendering, prompt and session flow
//! - [`runner`] - Script execution
//! - [`script`] - Script discovery and header parsing
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use smenu::script::{discover_scripts, load_catalog, DiscoveryOptions, HeaderMarkers};
//! use smenu::menu::render_menu;
//! use std::path::Path;
//!
//! let paths = discover_scripts(Path::new("./scripts"), &DiscoveryOptions::default())
//!     .expect("Failed to list scripts");
//! let catalog = load_catalog(paths, &HeaderMarkers::default());
//!
//! print!("{}", render_menu("Choose a script to run:", catalog.as_slice()));
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Menu rendering and selection.
pub mod menu;

/// Script execution.
pub mod runner;

/// Script discovery and header parsing.
pub mod script;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{Result, SmenuError};
pub use script::{Catalog, ScriptEntry};

//! Configuration module for smenu.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - `--config <path>`
//! - Directory-level `.smenurc.toml`
//! - User-level `~/.config/smenu/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, ConfigStack};
pub use types::{
    Config, ConfigLayer, ExcludeConfig, GeneralConfig, GeneralLayer, HeaderLayer, MenuConfig,
    MenuLayer, RunnerConfig, SortMode, DEFAULT_EXTENSION, DEFAULT_TITLE,
};

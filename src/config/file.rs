//! Configuration file loading and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::{Config, ConfigLayer};
use crate::error::SmenuError;
use crate::utils::{global_config_file, LOCAL_CONFIG_NAME};

/// Load one config file from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or holds values
/// that cannot work (such as an empty header marker).
fn load_layer_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let layer: ConfigLayer = toml::from_str(&content).map_err(|e| SmenuError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&layer, path)?;

    Ok(layer)
}

fn invalid(path: &Path, message: &str) -> SmenuError {
    SmenuError::InvalidConfig {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn validate(layer: &ConfigLayer, path: &Path) -> Result<(), SmenuError> {
    let markers = [&layer.header.name_marker, &layer.header.info_marker];
    if markers.iter().any(|m| m.as_deref() == Some("")) {
        return Err(invalid(path, "header markers must not be empty"));
    }
    if let Some(ext) = &layer.general.extension {
        if ext.trim_start_matches('.').is_empty() {
            return Err(invalid(path, "extension must not be empty"));
        }
    }

    Ok(())
}

/// A parsed config file and where it came from.
#[derive(Debug, Clone)]
struct Source {
    path: PathBuf,
    layer: ConfigLayer,
}

impl Source {
    /// Apply this file on top of `config`, leaving `config` untouched if the
    /// result would be unusable.
    fn apply_to(&self, config: &mut Config) -> Result<(), SmenuError> {
        let mut merged = config.clone();
        merged.merge(self.layer.clone());

        if merged.header.name_marker == merged.header.info_marker {
            return Err(invalid(&self.path, "name_marker and info_marker must differ"));
        }

        *config = merged;
        Ok(())
    }
}

/// Print a warning for a default config file that cannot be used.
fn warn_skipped(kind: &str, path: &Path, err: &dyn std::fmt::Display) {
    tracing::debug!(path = %path.display(), error = %err, "ignoring {kind} config");
    eprintln!(
        "Warning: Failed to load {kind} config at {}: {}",
        path.display(),
        err
    );
}

/// The user-level and `--config` files, read once at startup.
///
/// The directory config is only known after the script directory has been
/// resolved, which may itself depend on these files; see [`ConfigStack::resolve`].
#[derive(Debug, Clone, Default)]
pub struct ConfigStack {
    user: Option<Source>,
    cli: Option<Source>,
}

impl ConfigStack {
    /// Read the user-level config and the CLI-specified config.
    ///
    /// A missing user config is ignored and a broken one only produces a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the CLI-specified file cannot be read or parsed.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Self> {
        let user = global_config_file()
            .filter(|path| path.exists())
            .and_then(|path| match load_layer_from_path(&path) {
                Ok(layer) => Some(Source { path, layer }),
                Err(e) => {
                    warn_skipped("user", &path, &e);
                    None
                }
            });

        let cli = match cli_config_path {
            Some(path) => {
                let layer = load_layer_from_path(path).with_context(|| {
                    format!(
                        "Failed to load config from CLI-specified path: {}",
                        path.display()
                    )
                })?;
                Some(Source {
                    path: path.to_path_buf(),
                    layer,
                })
            }
            None => None,
        };

        Ok(Self { user, cli })
    }

    /// Script directory named by the loaded files, `--config` first.
    pub fn script_dir(&self) -> Option<&Path> {
        [&self.cli, &self.user]
            .into_iter()
            .flatten()
            .find_map(|source| source.layer.general.script_dir.as_deref())
    }

    /// Merge defaults, the user config, the directory config in
    /// `script_dir` (if any) and the CLI config, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the CLI-specified file conflicts with the layers
    /// below it. Problems with the other files only produce warnings.
    pub fn resolve(&self, script_dir: Option<&Path>) -> Result<Config> {
        let mut config = Config::default();

        if let Some(user) = &self.user {
            if let Err(e) = user.apply_to(&mut config) {
                warn_skipped("user", &user.path, &e);
            }
        }

        if let Some(dir) = script_dir {
            let path = dir.join(LOCAL_CONFIG_NAME);
            if path.exists() {
                let applied = load_layer_from_path(&path).and_then(|layer| {
                    let source = Source {
                        path: path.clone(),
                        layer,
                    };
                    source.apply_to(&mut config).map_err(Into::into)
                });
                if let Err(e) = applied {
                    warn_skipped("directory", &path, &format!("{e:#}"));
                }
            }
        }

        if let Some(cli) = &self.cli {
            cli.apply_to(&mut config).with_context(|| {
                format!(
                    "Failed to load config from CLI-specified path: {}",
                    cli.path.display()
                )
            })?;
        }

        tracing::debug!(?config, "configuration loaded");

        Ok(config)
    }
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/smenu/config.toml` (user-level, lowest priority)
/// 2. `.smenurc.toml` in the script directory
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing config files are handled gracefully (defaults are used).
///
/// # Errors
///
/// Returns an error if a specified config file (via CLI) cannot be read or parsed.
/// Broken default config files only produce a warning.
pub fn load_config(cli_config_path: Option<&Path>, script_dir: Option<&Path>) -> Result<Config> {
    ConfigStack::load(cli_config_path)?.resolve(script_dir)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r##"# smenu Configuration File
# Place this file at ~/.config/smenu/config.toml for global settings
# or .smenurc.toml inside a script directory for directory-specific settings

# General settings
[general]
# Directory to scan when none is given on the command line or in SMENU_DIR
# script_dir = "/home/me/scripts"

# Extension of script files to list
extension = "py"

# Menu ordering: "name" (sorted by file name) or "listing" (directory order)
sort = "name"

# Distinct exit codes for "no scripts", "invalid choice" and "script failed"
strict = false

# Header markers searched in the first block of each script
[header]
name_marker = "# SCRIPT_NAME:"
info_marker = "# SCRIPT_INFO:"

# Menu settings
[menu]
title = "Choose a script to run:"

# Exclude patterns
[exclude]
# Glob patterns matched against file names
patterns = [
    # "_*",
]

# Interpreters per extension (extensions not listed are executed directly)
[runner.interpreters]
# py = "python3 -u"
# sh = "bash"
"##
    .to_string()
}

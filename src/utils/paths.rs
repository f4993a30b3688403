//! Path utilities.

use std::path::{Path, PathBuf};

use crate::error::{Result, SmenuError};

/// Environment variable naming the script directory.
pub const SCRIPT_DIR_ENV: &str = "SMENU_DIR";

/// File name of the per-directory config.
pub const LOCAL_CONFIG_NAME: &str = ".smenurc.toml";

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Resolve the script directory.
///
/// The first of `explicit` (CLI argument or `SMENU_DIR`), `configured`
/// (`general.script_dir`) and the current directory wins. The result is
/// canonicalized so menus and messages show a stable absolute path.
///
/// # Errors
///
/// Returns an error if the chosen path does not exist or is not a directory.
pub fn resolve_script_dir(explicit: Option<&Path>, configured: Option<&Path>) -> Result<PathBuf> {
    let chosen = match explicit.or(configured) {
        Some(path) => expand_home(path),
        None => std::env::current_dir()?,
    };

    if !chosen.exists() {
        return Err(SmenuError::DirectoryNotFound { path: chosen });
    }
    if !chosen.is_dir() {
        return Err(SmenuError::NotADirectory { path: chosen });
    }

    chosen
        .canonicalize()
        .map_err(|source| SmenuError::IoWithContext {
            operation: "resolve".to_string(),
            path: chosen,
            source,
        })
}

/// Get the config directory for smenu.
///
/// Returns `~/.config/smenu` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("smenu"))
}

/// Get the global config file path.
///
/// Returns `~/.config/smenu/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find the local config file in a script directory.
pub fn local_config_file(script_dir: &Path) -> Option<PathBuf> {
    let config_file = script_dir.join(LOCAL_CONFIG_NAME);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}

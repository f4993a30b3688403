//! Configuration type definitions.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::script::HeaderMarkers;

/// Default script extension.
pub const DEFAULT_EXTENSION: &str = "py";

/// Default menu title line.
pub const DEFAULT_TITLE: &str = "Choose a script to run:";

/// Ordering of scripts in the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Sort by file name.
    #[default]
    Name,
    /// Keep the order the directory listing returns.
    Listing,
}

/// General configuration settings.
#[derive(Debug, Clone)]
pub struct GeneralConfig {
    /// Script directory used when none is given on the command line.
    pub script_dir: Option<PathBuf>,
    /// Script file extension.
    pub extension: String,
    /// Menu ordering.
    pub sort: SortMode,
    /// Use distinct exit codes for workflow errors.
    pub strict: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            script_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            sort: SortMode::default(),
            strict: false,
        }
    }
}

/// Menu appearance settings.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Line shown above the numbered options.
    pub title: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Exclude patterns configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeConfig {
    /// Glob patterns matched against file names.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Script runner settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunnerConfig {
    /// Interpreter command line per extension (extension -> command).
    #[serde(default)]
    pub interpreters: HashMap<String, String>,
}

/// Resolved configuration: defaults with every config file applied.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Header marker settings.
    pub header: HeaderMarkers,
    /// Menu settings.
    pub menu: MenuConfig,
    /// Exclude patterns.
    pub exclude: ExcludeConfig,
    /// Runner settings.
    pub runner: RunnerConfig,
}

/// `[general]` as written in one config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralLayer {
    pub script_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub sort: Option<SortMode>,
    pub strict: Option<bool>,
}

/// `[header]` as written in one config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaderLayer {
    pub name_marker: Option<String>,
    pub info_marker: Option<String>,
}

/// `[menu]` as written in one config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuLayer {
    pub title: Option<String>,
}

/// One config file. Keys the file leaves out stay `None` and do not
/// override earlier layers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub general: GeneralLayer,
    #[serde(default)]
    pub header: HeaderLayer,
    #[serde(default)]
    pub menu: MenuLayer,
    #[serde(default)]
    pub exclude: ExcludeConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one config file on top of this one.
    ///
    /// Only keys present in `layer` change; exclude patterns are appended
    /// and interpreters are added per extension.
    pub fn merge(&mut self, layer: ConfigLayer) {
        let ConfigLayer {
            general,
            header,
            menu,
            exclude,
            runner,
        } = layer;

        if let Some(dir) = general.script_dir {
            self.general.script_dir = Some(dir);
        }
        if let Some(extension) = general.extension {
            self.general.extension = extension.trim_start_matches('.').to_string();
        }
        if let Some(sort) = general.sort {
            self.general.sort = sort;
        }
        if let Some(strict) = general.strict {
            self.general.strict = strict;
        }

        if let Some(marker) = header.name_marker {
            self.header.name_marker = marker;
        }
        if let Some(marker) = header.info_marker {
            self.header.info_marker = marker;
        }

        if let Some(title) = menu.title {
            self.menu.title = title;
        }

        // Exclude patterns - append rather than replace
        self.exclude.patterns.extend(exclude.patterns);

        self.runner.interpreters.extend(runner.interpreters);
    }

    /// Interpreter configured for an extension, if any.
    pub fn interpreter_for(&self, extension: &str) -> Option<&str> {
        self.runner
            .interpreters
            .get(extension.trim_start_matches('.'))
            .map(String::as_str)
    }
}

//! CLI argument definitions for smenu.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use smenu::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Script dir: {:?}", cli.dir);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::{Config, SortMode};
use crate::utils::SCRIPT_DIR_ENV;

/// Numbered menu launcher for a directory of annotated scripts.
#[derive(Parser, Debug)]
#[command(name = "smenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script directory (default: config `script_dir`, then current directory)
    #[arg(value_name = "DIR", env = SCRIPT_DIR_ENV)]
    pub dir: Option<PathBuf>,

    /// Script file extension (default: py)
    #[arg(short = 'x', long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Exclude scripts whose file name matches pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Menu ordering
    #[arg(short, long, value_name = "MODE", value_enum)]
    pub sort: Option<CliSortMode>,

    /// Choose a script by number without prompting
    #[arg(short = 'n', long, value_name = "N", allow_hyphen_values = true)]
    pub select: Option<String>,

    /// List scripts non-interactively
    #[arg(short, long)]
    pub list: bool,

    /// With --list, print JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Interpreter command used to run the chosen script
    #[arg(short, long, value_name = "CMD")]
    pub interpreter: Option<String>,

    /// Show command without executing
    #[arg(short, long)]
    pub dry_run: bool,

    /// Use distinct exit codes for no scripts, invalid choice and failed script
    #[arg(long)]
    pub strict: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Print an example config file
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Sort mode for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliSortMode {
    /// Sort by file name.
    Name,
    /// Keep directory listing order.
    Listing,
}

impl From<CliSortMode> for SortMode {
    fn from(mode: CliSortMode) -> Self {
        match mode {
            CliSortMode::Name => SortMode::Name,
            CliSortMode::Listing => SortMode::Listing,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ext) = &self.extension {
            config.general.extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(sort) = self.sort {
            config.general.sort = sort.into();
        }
        if self.strict {
            config.general.strict = true;
        }
        config.exclude.patterns.extend(self.exclude.iter().cloned());
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "smenu", &mut std::io::stdout());
    }
}

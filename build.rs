//! Build script for smenu.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "smenu")]
#[command(
    author,
    version,
    about = "Numbered menu launcher for a directory of annotated scripts"
)]
#[command(
    long_about = "smenu scans a directory for script files, reads the \
    '# SCRIPT_NAME: [..]' and '# SCRIPT_INFO: [..]' lines at the top of each one \
    and shows them as a numbered menu.\n\n\
    Enter the number of a script to run it. Failures of the chosen script are \
    reported and do not stop the menu itself."
)]
struct Cli {
    /// Script directory (default: config `script_dir`, then current directory)
    #[arg(value_name = "DIR", env = "SMENU_DIR")]
    dir: Option<PathBuf>,

    /// Script file extension (default: py)
    #[arg(short = 'x', long, value_name = "EXT")]
    extension: Option<String>,

    /// Exclude scripts whose file name matches pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Menu ordering
    #[arg(short, long, value_name = "MODE", value_enum)]
    sort: Option<SortMode>,

    /// Choose a script by number without prompting
    #[arg(short = 'n', long, value_name = "N", allow_hyphen_values = true)]
    select: Option<String>,

    /// List scripts non-interactively
    #[arg(short, long)]
    list: bool,

    /// With --list, print JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Interpreter command used to run the chosen script
    #[arg(short, long, value_name = "CMD")]
    interpreter: Option<String>,

    /// Show command without executing
    #[arg(short, long)]
    dry_run: bool,

    /// Use distinct exit codes for no scripts, invalid choice and failed script
    #[arg(long)]
    strict: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Print an example config file
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortMode {
    Name,
    Listing,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SMENU_GEN_MANPAGE");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("SMENU_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let man = clap_mangen::Man::new(Cli::command());

    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to generate man page: {e}");
        return;
    }

    let man_path = out_dir.join("smenu.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("smenu.1"));
        }
    }
}

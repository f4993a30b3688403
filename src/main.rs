//! smenu - Script Menu
//!
//! Entry point for the smenu CLI application.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use smenu::cli::Cli;
use smenu::config::{generate_example_config, ConfigStack};
use smenu::error::{exit_code, SmenuError};
use smenu::menu::{menu_lines, Session};
use smenu::runner::{Interpreter, ProcessLauncher};
use smenu::script::{discover_scripts, load_catalog, Catalog, DiscoveryOptions};
use smenu::utils::{global_config_file, local_config_file, resolve_script_dir};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(smenu_err) = err.downcast_ref::<SmenuError>() {
                eprintln!("Error: {smenu_err}");
                return ExitCode::from(smenu_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.print_config {
        print!("{}", generate_example_config());
        return Ok(exit_code::SUCCESS);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), ?cli, "starting");

    // User and --config files may name the script directory
    let stack = if cli.no_config {
        ConfigStack::default()
    } else {
        ConfigStack::load(cli.config.as_deref())?
    };

    let script_dir = resolve_script_dir(cli.dir.as_deref(), stack.script_dir())
        .context("Failed to find script directory")?;

    let mut config = stack.resolve((!cli.no_config).then_some(script_dir.as_path()))?;
    cli.apply_to(&mut config);

    if cli.debug {
        log_paths(&script_dir);
    }

    let options = DiscoveryOptions {
        extension: config.general.extension.clone(),
        sort: config.general.sort,
        exclude: config.exclude.patterns.clone(),
    };
    let paths = discover_scripts(&script_dir, &options)?;
    let catalog = load_catalog(paths, &config.header);

    for problem in catalog.problems() {
        eprintln!("Warning: {problem}");
    }

    let strict = config.general.strict;

    if cli.list {
        return list_scripts(&catalog, &script_dir, &config.general.extension, cli.json, strict);
    }

    let interpreter = Interpreter::resolve(
        &config.general.extension,
        &config,
        cli.interpreter.as_deref(),
    )?;
    let mut launcher = ProcessLauncher::new(interpreter, &script_dir).dry_run(cli.dry_run);

    let session = Session::new(&catalog, &script_dir, &config.general.extension)
        .title(config.menu.title.clone())
        .preselect(cli.select.clone());

    // Read the choice unbuffered so the rest of stdin reaches the script
    let mut input = raw_stdin().context("Failed to open stdin")?;
    let mut output = io::stdout().lock();

    match session.run(&mut input, &mut output, &mut launcher) {
        Ok(choice) => {
            tracing::debug!(choice, "session finished");
            Ok(exit_code::SUCCESS)
        }
        Err(err) if err.is_workflow() => {
            // Workflow outcomes are reported, not treated as crashes
            writeln!(output, "{err}")?;
            Ok(err.exit_code_for(strict))
        }
        Err(err) => Err(err.into()),
    }
}

/// An unbuffered handle on standard input.
#[cfg(unix)]
fn raw_stdin() -> io::Result<File> {
    use std::os::fd::AsFd;
    Ok(File::from(io::stdin().as_fd().try_clone_to_owned()?))
}

/// An unbuffered handle on standard input.
#[cfg(windows)]
fn raw_stdin() -> io::Result<File> {
    use std::os::windows::io::AsHandle;
    Ok(File::from(io::stdin().as_handle().try_clone_to_owned()?))
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` is honoured unless `--debug` is given.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("smenu=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// List scripts without prompting (non-interactive mode).
fn list_scripts(
    catalog: &Catalog,
    script_dir: &Path,
    extension: &str,
    json: bool,
    strict: bool,
) -> Result<i32> {
    if catalog.is_empty() {
        let err = SmenuError::EmptyDirectory {
            path: script_dir.to_path_buf(),
            extension: extension.to_string(),
        };
        if json {
            println!("[]");
        } else {
            println!("{err}");
        }
        return Ok(err.exit_code_for(strict));
    }

    if json {
        let items: Vec<serde_json::Value> = catalog
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                serde_json::json!({
                    "index": idx + 1,
                    "name": entry.name(),
                    "description": entry.description(),
                    "path": entry.path().display().to_string(),
                })
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&items).context("Failed to encode JSON")?;
        println!("{rendered}");
        return Ok(exit_code::SUCCESS);
    }

    for line in menu_lines(catalog.as_slice()) {
        println!("{line}");
    }
    println!();
    println!("{} scripts found in {}", catalog.len(), script_dir.display());

    Ok(exit_code::SUCCESS)
}

/// Log where configuration is read from.
fn log_paths(script_dir: &Path) {
    match global_config_file() {
        Some(cfg) => tracing::debug!(path = %cfg.display(), exists = cfg.exists(), "global config"),
        None => tracing::debug!("global config: <not available>"),
    }
    match local_config_file(script_dir) {
        Some(cfg) => tracing::debug!(path = %cfg.display(), "directory config"),
        None => tracing::debug!(dir = %script_dir.display(), "no directory config"),
    }
}

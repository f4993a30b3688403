//! Test fixtures for creating temporary script directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Build a header block for a script.
pub fn header(name: &str, info: &str) -> String {
    format!("# SCRIPT_NAME: [{name}]\n# SCRIPT_INFO: [{info}]\n")
}

/// Create a directory holding the given `(file name, content)` pairs.
pub fn create_script_dir(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    for (name, content) in files {
        write_file(temp.path(), name, content);
    }
    temp
}

/// Write one file into a directory.
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content)
        .unwrap_or_else(|e| panic!("Failed to write {name}: {e}"));
}

/// An empty script directory.
pub fn create_empty_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Two shell scripts: `a.sh` with a header, `b.sh` without.
///
/// Each prints `ran <letter>` so tests can tell which one executed.
pub fn hello_scripts() -> TempDir {
    let a = format!("{}echo ran a\n", header("Hello", "Says hi"));
    create_script_dir(&[("a.sh", a.as_str()), ("b.sh", "echo ran b\n")])
}

/// Shell scripts that all carry headers.
pub fn named_scripts() -> TempDir {
    let backup = format!("{}echo backing up\n", header("Backup", "Copy files"));
    let clean = format!("{}echo cleaning\n", header("Clean", "Remove temp files"));
    let fail = format!("{}echo about to fail\nexit 5\n", header("Fail", "Always fails"));
    create_script_dir(&[
        ("backup.sh", backup.as_str()),
        ("clean.sh", clean.as_str()),
        ("fail.sh", fail.as_str()),
    ])
}

/// Canonical path of a temp directory as the binary prints it.
pub fn display_dir(dir: &TempDir) -> String {
    dir.path()
        .canonicalize()
        .expect("Failed to canonicalize temp dir")
        .display()
        .to_string()
}

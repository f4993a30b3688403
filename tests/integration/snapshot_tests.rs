//! Snapshot tests for smenu output using insta.
//!
//! Temp directory paths are replaced with `[DIR]` before comparison.

use tempfile::TempDir;

use crate::integration::fixtures::{display_dir, named_scripts};
use crate::integration::smenu;

/// Run smenu against a directory and return normalized stdout.
fn run_normalized(dir: &TempDir, args: &[&str], stdin: &str) -> String {
    let output = smenu()
        .args(args)
        .arg(dir.path())
        .write_stdin(stdin)
        .output()
        .expect("Failed to run smenu");

    String::from_utf8_lossy(&output.stdout)
        .replace(&display_dir(dir), "[DIR]")
        .trim()
        .to_string()
}

#[test]
fn test_snapshot_menu_with_dry_run() {
    let dir = named_scripts();
    let output = run_normalized(&dir, &["-x", "sh", "--select", "1", "--dry-run"], "");

    insta::assert_snapshot!(output, @r"
    ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
    ┃ Choose a script to run:      ┃
    ┃ 1. Backup - Copy files       ┃
    ┃ 2. Clean - Remove temp files ┃
    ┃ 3. Fail - Always fails       ┃
    ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛

    Running [DIR]/backup.sh...

    Would run: sh [DIR]/backup.sh
    ");
}

#[test]
fn test_snapshot_invalid_choice() {
    let dir = named_scripts();
    let output = run_normalized(&dir, &["-x", "sh"], "7\n");

    insta::assert_snapshot!(output, @r"
    ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
    ┃ Choose a script to run:      ┃
    ┃ 1. Backup - Copy files       ┃
    ┃ 2. Clean - Remove temp files ┃
    ┃ 3. Fail - Always fails       ┃
    ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛

    Enter the number of the script to run: Invalid choice.
    ");
}

#[test]
fn test_snapshot_list() {
    let dir = named_scripts();
    let output = run_normalized(&dir, &["-x", "sh", "--list"], "");

    insta::assert_snapshot!(output, @r"
    1. Backup - Copy files
    2. Clean - Remove temp files
    3. Fail - Always fails

    3 scripts found in [DIR]
    ");
}

//! Configuration tests driven through the binary.

use predicates::prelude::*;

use std::fs;

use crate::integration::fixtures::{create_empty_dir, create_script_dir, header, write_file};
use crate::integration::smenu;

#[test]
fn test_directory_config_sets_extension_and_title() {
    let body = format!("{}echo shell\n", header("Shell", "From sh"));
    let dir = create_script_dir(&[("one.sh", body.as_str()), ("two.py", "print(1)\n")]);
    write_file(
        dir.path(),
        ".smenurc.toml",
        "[general]\nextension = \"sh\"\n\n[menu]\ntitle = \"Pick one:\"\n",
    );

    smenu()
        .arg(dir.path())
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick one:"))
        .stdout(predicate::str::contains("1. Shell - From sh"))
        .stdout(predicate::str::contains("two").not())
        .stdout(predicate::str::contains("Invalid choice."));
}

#[test]
fn test_directory_config_custom_markers() {
    let dir = create_script_dir(&[(
        "tool.sh",
        "// @name [Tool]\n// @info [Does things]\necho tool\n",
    )]);
    write_file(
        dir.path(),
        ".smenurc.toml",
        "[general]\nextension = \"sh\"\n\n[header]\nname_marker = \"// @name\"\ninfo_marker = \"// @info\"\n",
    );

    smenu()
        .args(["--list"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Tool - Does things"));
}

#[test]
fn test_directory_config_exclude_patterns() {
    let dir = create_script_dir(&[
        ("keep.sh", "echo keep\n"),
        ("_private.sh", "echo private\n"),
    ]);
    write_file(
        dir.path(),
        ".smenurc.toml",
        "[general]\nextension = \"sh\"\n\n[exclude]\npatterns = [\"_*\"]\n",
    );

    smenu()
        .arg("--list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 scripts found"));
}

#[test]
fn test_directory_config_strict() {
    let dir = create_empty_dir();
    write_file(dir.path(), ".smenurc.toml", "[general]\nstrict = true\n");

    smenu().arg(dir.path()).assert().code(3);
}

#[test]
fn test_broken_directory_config_only_warns() {
    let dir = create_script_dir(&[("a.py", "print(1)\n")]);
    write_file(dir.path(), ".smenurc.toml", "[general\nextension = ");

    smenu()
        .arg("--list")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Failed to load directory config"))
        .stdout(predicate::str::contains("1 scripts found"));
}

#[test]
fn test_no_config_ignores_directory_config() {
    let dir = create_script_dir(&[("a.py", "print(1)\n"), ("b.sh", "echo b\n")]);
    write_file(dir.path(), ".smenurc.toml", "[general]\nextension = \"sh\"\n");

    smenu()
        .args(["--no-config", "--list", "--json"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.py"))
        .stdout(predicate::str::contains("b.sh").not());
}

#[test]
fn test_cli_config_names_script_dir() {
    let scripts = create_script_dir(&[("hello.sh", "echo hello\n")]);
    let conf = create_empty_dir();
    let config_body = format!(
        "[general]\nscript_dir = \"{}\"\nextension = \"sh\"\n",
        scripts.path().display()
    );
    write_file(conf.path(), "custom.toml", &config_body);

    smenu()
        .arg("--config")
        .arg(conf.path().join("custom.toml"))
        .args(["--select", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn test_cli_config_interpreter() {
    let dir = create_script_dir(&[("job.task", "echo via config\n")]);
    let conf = create_empty_dir();
    write_file(
        conf.path(),
        "custom.toml",
        "[general]\nextension = \"task\"\n\n[runner.interpreters]\ntask = \"sh\"\n",
    );

    smenu()
        .arg("--config")
        .arg(conf.path().join("custom.toml"))
        .args(["--select", "1"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("via config"));
}

#[test]
fn test_extension_flag_overrides_config() {
    let dir = create_script_dir(&[("a.py", "print(1)\n"), ("b.sh", "echo b\n")]);
    write_file(dir.path(), ".smenurc.toml", "[general]\nextension = \"py\"\n");

    smenu()
        .args(["--list", "--json", "-x", "sh"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("b.sh"))
        .stdout(predicate::str::contains("a.py").not());
}

#[test]
fn test_invalid_cli_config() {
    let dir = create_empty_dir();
    write_file(dir.path(), "bad.toml", "[general]\nsort = \"sideways\"\n");

    smenu()
        .arg("--config")
        .arg(dir.path().join("bad.toml"))
        .arg(dir.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_identical_markers_rejected() {
    let dir = create_empty_dir();
    write_file(
        dir.path(),
        "bad.toml",
        "[header]\nname_marker = \"#\"\ninfo_marker = \"#\"\n",
    );

    smenu()
        .arg("--config")
        .arg(dir.path().join("bad.toml"))
        .arg(dir.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("must differ"));
}

#[test]
fn test_missing_cli_config() {
    let dir = create_empty_dir();

    smenu()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config from CLI-specified path"));
}

#[test]
fn test_partial_cli_config_keeps_directory_extension() {
    let dir = create_script_dir(&[("one.sh", "echo one\n")]);
    write_file(dir.path(), ".smenurc.toml", "[general]\nextension = \"sh\"\n");
    let conf = create_empty_dir();
    write_file(conf.path(), "title.toml", "[menu]\ntitle = \"Pick:\"\n");

    smenu()
        .arg("--config")
        .arg(conf.path().join("title.toml"))
        .arg("--list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 scripts found"));

    smenu()
        .arg("--config")
        .arg(conf.path().join("title.toml"))
        .arg(dir.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick:"));
}

#[test]
fn test_broken_user_config_warns_once() {
    let home = create_empty_dir();
    fs::create_dir_all(home.path().join("smenu")).expect("Failed to create config dir");
    write_file(&home.path().join("smenu"), "config.toml", "[general\n");

    let dir = create_script_dir(&[("a.sh", "echo a\n")]);
    write_file(dir.path(), ".smenurc.toml", "[general]\nextension = \"sh\"\n");

    smenu()
        .env("XDG_CONFIG_HOME", home.path())
        .arg("--list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 scripts found"))
        .stderr(predicate::function(|err: &str| {
            err.matches("Failed to load user config").count() == 1
        }));
}

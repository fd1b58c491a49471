use assert_cmd::Command;
use clap_complete::Shell;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_perfreport_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("perfreport")
}

#[test]
fn test_completion_command_help() {
    let mut cmd = Command::new(get_perfreport_bin());
    cmd.arg("completion").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("--shell"));
}

#[test]
fn test_completion_bash_generates_script() {
    let mut cmd = Command::new(get_perfreport_bin());
    cmd.arg("completion").arg("--shell").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_perfreport()"))
        .stdout(predicate::str::contains("complete -F _perfreport"));
}

#[test]
fn test_completion_fish_generates_script() {
    let mut cmd = Command::new(get_perfreport_bin());
    cmd.arg("completion").arg("--shell").arg("fish");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("complete -c perfreport"));
}

#[test]
fn test_completion_invalid_shell() {
    let mut cmd = Command::new(get_perfreport_bin());
    cmd.arg("completion").arg("--shell").arg("tcsh");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_write_script_into_buffer() {
    let mut command = clap::Command::new("perfreport").subcommand(clap::Command::new("summary"));
    let mut buffer = Vec::new();

    perfreport_cli::commands::completion::write_script(Shell::Zsh, &mut command, &mut buffer)
        .unwrap();

    let script = String::from_utf8(buffer).unwrap();
    assert!(script.contains("#compdef perfreport"));
}

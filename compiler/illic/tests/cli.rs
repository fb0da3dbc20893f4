#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code: panics provide clear failure messages"
)]

//! End-to-end tests for the `illi` binary.
//!
//! Each test spawns the built binary, so these cover argument handling,
//! exit statuses and the exact bytes written to stdout and stderr.
//!
//! ```bash
//! cargo test -p illic --test cli
//! ```

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn illi() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_illi"));
    command.env_remove("ILLI_LOG").env_remove("RUST_LOG");
    command
}

fn run_args(args: &[&str]) -> Output {
    illi().args(args).output().expect("failed to spawn illi")
}

/// Write `source` to a temp file and run it (colors off).
fn run_source(source: &str) -> Output {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    run_path(file.path())
}

fn run_path(path: &Path) -> Output {
    illi()
        .arg("--color=never")
        .arg(path)
        .output()
        .expect("failed to spawn illi")
}

/// Pipe `input` into the interactive prompt.
fn run_repl(input: &str) -> Output {
    let mut child = illi()
        .arg("--color=never")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn illi");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn script_runs_and_exits_zero() {
    let output = run_source(
        "// greeting\nvar who = \"world\";\n{\n  var who = \"block\";\n  print \"hello \" + who;\n}\nprint \"hello \" + who;\n",
    );
    assert_eq!(stdout(&output), "hello block\nhello world\n");
    assert_eq!(stderr(&output), "");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn syntax_errors_exit_65_without_running() {
    let output = run_source("print \"side effect\";\nprint 1 +;\nvar = 2;\n");
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "[line 2] Error at ';': Expect expression.\n[line 3] Error at '=': Expect variable name.\n"
    );
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn lexical_errors_exit_65() {
    let output = run_source("print \"open;\n");
    assert_eq!(
        stderr(&output),
        "[line 2] Error: Unterminated string.\n[line 2] Error at end: Expect expression.\n"
    );
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn runtime_error_exits_70_after_earlier_output() {
    let output = run_source("print 1;\nprint 1 / 0;\nprint 2;\n");
    assert_eq!(stdout(&output), "1\n");
    assert_eq!(
        stderr(&output),
        "[line 2] Error at '/'\nArithmetic division by 0\n"
    );
    assert_eq!(output.status.code(), Some(70));
}

#[test]
fn missing_file_exits_66() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_path(&dir.path().join("nowhere.illi"));
    assert!(stderr(&output).starts_with("File not found: "));
    assert_eq!(output.status.code(), Some(66));
}

#[test]
fn two_scripts_exit_64() {
    let output = run_args(&["a.illi", "b.illi"]);
    assert_eq!(stderr(&output), "Usage: illi [script]\n");
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn bad_color_value_exits_64() {
    let output = run_args(&["--color=rainbow"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn explain_prints_the_code_description() {
    let output = run_args(&["--explain", "E1011"]);
    assert_eq!(
        stdout(&output),
        "E1011 (syntax error): a binary operator appears with nothing on its left\n"
    );
    assert_eq!(output.status.code(), Some(0));

    let output = run_args(&["--explain", "E4242"]);
    assert!(stderr(&output).starts_with("Unknown error code: E4242"));
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn repl_echoes_and_keeps_state() {
    let output = run_repl("var x = 6;\nx * 7;\nprint \"done\";\n");
    assert_eq!(
        stdout(&output),
        "(To exit, press ^D or enter #exit)\n> > 42\n> done\n> "
    );
    assert_eq!(stderr(&output), "");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn repl_survives_errors_and_exits_on_command() {
    let output = run_repl("1 +;\n-\"s\";\n1 + 1;\n#exit\nprint \"unreached\";\n");
    assert_eq!(
        stdout(&output),
        "(To exit, press ^D or enter #exit)\n> > > 2\n> "
    );
    assert_eq!(
        stderr(&output),
        "[line 1] Error at ';': Expect expression.\n[line 1] Error at '-'\nOperand must be a number\n"
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn tracing_goes_to_stderr_only_when_requested() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"print 1;").unwrap();

    let output = illi()
        .env("ILLI_LOG", "debug")
        .arg(file.path())
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "1\n");
    assert!(!stderr(&output).is_empty());
    assert_eq!(output.status.code(), Some(0));
}

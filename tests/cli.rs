// SPDX-License-Identifier: MIT
//
// End-to-end runs of the n-prompt binary with stdin closed, which is the
// non-interactive path every script hits under CI or a pipe.

use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn n_prompt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_n-prompt"))
        .args(args)
        .stdin(Stdio::null())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> &str {
    std::str::from_utf8(&out.stdout).unwrap()
}

#[test]
fn select_prints_default() {
    let out = n_prompt(&["select", "fast[quick]|slow[exact]", "Profile", "slow"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "slow\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn select_falls_back_to_first() {
    let out = n_prompt(&["select", "a|b|c", "Pick", "missing"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "a\n");
}

#[test]
fn select_multi_passes_defaults_through() {
    let out = n_prompt(&["select-multi", "a|b|c", "Pick", "c|zzz"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "c\nzzz\n");
}

#[test]
fn select_multi_without_defaults_prints_nothing() {
    let out = n_prompt(&["select-multi", "a|b|c"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn select_multi_empty_defaults_argument_prints_nothing() {
    let out = n_prompt(&["select-multi", "a|b|c", "Pick", ""]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn input_prints_default() {
    let out = n_prompt(&["input", "Name", "Ada"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Ada\n");
}

#[test]
fn missing_subcommand_is_usage_error() {
    let out = n_prompt(&[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_options_is_usage_error() {
    let out = n_prompt(&["select"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn log_file_receives_debug_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("prompt.log");
    let out = n_prompt(&["--log-file", log.to_str().unwrap(), "input", "Name", "x"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "x\n");
    let logged = std::fs::read_to_string(&log).unwrap();
    assert!(logged.contains("not a terminal"), "{logged}");
}

#[test]
fn unwritable_log_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("missing").join("prompt.log");
    let out = n_prompt(&["--log-file", log.to_str().unwrap(), "input"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.starts_with("n-prompt: unable to open"), "{err}");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;

use tempfile::tempdir;

use super::*;
use crate::ast::{Command, FdRedirect, RedirectionMode};
use crate::path_resolver::PathResolver;

fn command(argv: &[&str]) -> Command {
    let argv: Vec<String> = argv.iter().map(|a| a.to_string()).collect();
    Command {
        name: argv[0].clone(),
        argv,
        stdout_redirect: FdRedirect::none(),
        stderr_redirect: FdRedirect::none(),
    }
}

#[test]
fn unknown_command_does_not_panic() {
    let resolver = PathResolver::new();
    let executor = ProcessExecutor::new(&resolver);
    executor.run(&command(&["definitely_not_a_real_binary_xyz"]));
}

#[test]
fn stdout_redirect_captures_child_output() {
    let resolver = PathResolver::new();
    let executor = ProcessExecutor::new(&resolver);
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "hello from cat\n").unwrap();

    let mut cmd = command(&["cat", input.to_str().unwrap()]);
    cmd.stdout_redirect = FdRedirect {
        mode: RedirectionMode::Truncate,
        target: output.to_str().unwrap().to_string(),
    };
    executor.run(&cmd);

    assert_eq!(fs::read_to_string(&output).unwrap(), "hello from cat\n");
}

#[test]
fn stderr_redirect_captures_child_error_output() {
    let resolver = PathResolver::new();
    let executor = ProcessExecutor::new(&resolver);
    let dir = tempdir().unwrap();
    let errfile = dir.path().join("err.txt");

    let mut cmd = command(&["ls", "/definitely/not/a/real/path"]);
    cmd.stderr_redirect = FdRedirect {
        mode: RedirectionMode::Truncate,
        target: errfile.to_str().unwrap().to_string(),
    };
    executor.run(&cmd);

    let contents = fs::read_to_string(&errfile).unwrap();
    assert!(!contents.is_empty());
}

#[test]
fn true_and_false_run_to_completion() {
    let resolver = PathResolver::new();
    let executor = ProcessExecutor::new(&resolver);
    executor.run(&command(&["true"]));
    executor.run(&command(&["false"]));
}

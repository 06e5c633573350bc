// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::lexer::Lexer;

fn parse_line(line: &str) -> Option<Pipeline> {
    parse(Lexer::tokenize(line))
}

#[test]
fn empty_line_yields_no_pipeline() {
    assert!(parse_line("").is_none());
}

#[test]
fn simple_command_has_one_stage() {
    let pipeline = parse_line("echo hello world").unwrap();
    assert!(pipeline.is_single());
    assert_eq!(pipeline.commands[0].name, "echo");
    assert_eq!(pipeline.commands[0].argv, vec!["echo", "hello", "world"]);
}

#[test]
fn pipe_splits_into_multiple_stages() {
    let pipeline = parse_line("echo foo | tr o 0").unwrap();
    assert_eq!(pipeline.commands.len(), 2);
    assert_eq!(pipeline.commands[0].argv, vec!["echo", "foo"]);
    assert_eq!(pipeline.commands[1].argv, vec!["tr", "o", "0"]);
}

#[test]
fn stdout_redirect_is_extracted_from_argv() {
    let pipeline = parse_line("ls /tmp > /tmp/out.txt").unwrap();
    let cmd = &pipeline.commands[0];
    assert_eq!(cmd.argv, vec!["ls", "/tmp"]);
    assert_eq!(cmd.stdout_redirect.mode, RedirectionMode::Truncate);
    assert_eq!(cmd.stdout_redirect.target, "/tmp/out.txt");
}

#[test]
fn stderr_append_redirect_is_extracted() {
    let pipeline = parse_line("ls 2>> /tmp/err.txt").unwrap();
    let cmd = &pipeline.commands[0];
    assert_eq!(cmd.stderr_redirect.mode, RedirectionMode::Append);
    assert_eq!(cmd.stderr_redirect.target, "/tmp/err.txt");
}

#[test]
fn last_redirect_to_same_fd_wins() {
    let pipeline = parse_line("ls > /tmp/a > /tmp/b").unwrap();
    let cmd = &pipeline.commands[0];
    assert_eq!(cmd.stdout_redirect.target, "/tmp/b");
}

#[test]
fn dangling_redirect_with_no_target_is_discarded() {
    let pipeline = parse_line("ls >").unwrap();
    let cmd = &pipeline.commands[0];
    assert_eq!(cmd.argv, vec!["ls"]);
    assert!(!cmd.stdout_redirect.is_set());
}

#[test]
fn redirection_only_stage_is_an_empty_command() {
    let pipeline = parse_line("> /tmp/out.txt").unwrap();
    let cmd = &pipeline.commands[0];
    assert!(cmd.is_empty());
    assert_eq!(cmd.stdout_redirect.target, "/tmp/out.txt");
}

#[test]
fn pipe_inside_quotes_does_not_split_the_pipeline() {
    let pipeline = parse_line("echo 'a|b'").unwrap();
    assert!(pipeline.is_single());
    assert_eq!(pipeline.commands[0].argv, vec!["echo", "a|b"]);
}

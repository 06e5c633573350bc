// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Groups a token stream into a `Pipeline` of `Command`s.

use crate::ast::{Command, FdRedirect, Pipeline, RedirectionMode};
use crate::token::{Operator, Token};

/// Parse a full token stream into a pipeline.
///
/// Returns `None` for an empty token stream (an empty input line) — a
/// `Pipeline` with zero commands is never produced.
pub fn parse(tokens: Vec<Token>) -> Option<Pipeline> {
    if tokens.is_empty() {
        return None;
    }

    let commands = tokens
        .split(|t| matches!(t, Token::Operator(Operator::Pipe)))
        .map(parse_stage)
        .collect();

    Some(Pipeline { commands })
}

/// Parse one `|`-delimited run of tokens into a `Command`.
fn parse_stage(tokens: &[Token]) -> Command {
    let mut argv = Vec::new();
    let mut stdout_redirect = FdRedirect::none();
    let mut stderr_redirect = FdRedirect::none();

    let mut iter = tokens.iter().peekable();
    while let Some(token) = iter.next() {
        match token {
            Token::Word(word) => argv.push(word.clone()),
            Token::Operator(op) if op.is_redirection() => {
                // The following token must exist and be a Word; otherwise
                // the redirection is silently discarded and the dangling
                // operator is simply dropped (it was already consumed).
                let Some(Token::Word(target)) = iter.peek() else {
                    continue;
                };
                let target = target.clone();
                iter.next();

                let mode = if op.is_append() {
                    RedirectionMode::Append
                } else {
                    RedirectionMode::Truncate
                };
                let redirect = FdRedirect { mode, target };

                match op.fd() {
                    Some(1) => stdout_redirect = redirect,
                    Some(2) => stderr_redirect = redirect,
                    _ => unreachable!("a redirection operator always targets fd 1 or 2"),
                }
            }
            Token::Operator(Operator::Pipe) => {
                unreachable!("pipe tokens are split out before per-stage parsing")
            }
        }
    }

    let name = argv.first().cloned().unwrap_or_default();
    Command {
        name,
        argv,
        stdout_redirect,
        stderr_redirect,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs a single external command (not a built-in, not part of a pipeline).

use std::process::Command as StdCommand;

use crate::ast::Command;
use crate::error::ShellError;
use crate::path_resolver::PathResolver;

use super::redirect;

pub struct ProcessExecutor<'a> {
    path_resolver: &'a PathResolver,
}

impl<'a> ProcessExecutor<'a> {
    pub fn new(path_resolver: &'a PathResolver) -> Self {
        Self { path_resolver }
    }

    /// Resolve `cmd.name` on the search path and run it to completion.
    /// A lookup miss is reported to stdout, matching the observed behavior;
    /// a spawn failure is reported to stderr. Neither aborts the REPL.
    pub fn run(&self, cmd: &Command) {
        let span = tracing::info_span!("process.exec", command = %cmd.name);
        let _enter = span.enter();

        let Some(path) = self.path_resolver.find(&cmd.name) else {
            println!(
                "{}",
                ShellError::CommandNotFound {
                    name: cmd.name.clone()
                }
            );
            return;
        };

        let mut command = StdCommand::new(&path);
        command.args(&cmd.argv[1..]);
        command.stdout(redirect::stdio_for(&cmd.stdout_redirect, redirect::Stream::Stdout));
        command.stderr(redirect::stdio_for(&cmd.stderr_redirect, redirect::Stream::Stderr));

        match command.spawn() {
            Ok(mut child) => {
                let _ = child.wait();
            }
            Err(err) => {
                let spawn_err = ShellError::Spawn {
                    command: cmd.name.clone(),
                    source: err,
                };
                eprintln!("{spawn_err}");
                tracing::warn!(command = %cmd.name, error = %spawn_err, "spawn failed");
            }
        }
    }
}

#[cfg(test)]
#[path = "../process_tests.rs"]
mod tests;

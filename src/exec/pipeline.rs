// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestrates a multi-stage pipeline without naming `pipe(2)` or `fork(2)`:
//! each external stage is spawned with a piped stdout, and that `ChildStdout`
//! is handed directly to the next stage's stdin. A built-in that isn't the
//! last stage runs in-process with its output captured into a buffer, which
//! is then written into the next stage's stdin pipe exactly like heredoc
//! data would be — there is no separate child for an in-pipeline built-in.

use std::io::Write;
use std::process::{Child, ChildStdout, Command as StdCommand, Stdio};

use crate::ast::Pipeline;
use crate::builtins::{BuiltinContext, BuiltinOutcome, BuiltinRegistry};
use crate::error::ShellError;
use crate::history::History;
use crate::path_resolver::PathResolver;

use super::redirect::{self, OutputTarget, Stream};

enum PendingStdin {
    /// The previous stage was an external process; here is its stdout pipe.
    Process(ChildStdout),
    /// The previous stage was a built-in; here is its captured output.
    Data(Vec<u8>),
}

pub struct PipelineExecutor<'a> {
    registry: &'a BuiltinRegistry,
    path_resolver: &'a PathResolver,
}

impl<'a> PipelineExecutor<'a> {
    pub fn new(registry: &'a BuiltinRegistry, path_resolver: &'a PathResolver) -> Self {
        Self {
            registry,
            path_resolver,
        }
    }

    /// Run every stage left to right. Returns `Some(Exit(code))` if any
    /// stage was `exit`; the caller decides whether to terminate the REPL
    /// after the remaining stages have been waited on.
    pub fn run(&self, pipeline: &Pipeline, history: &mut History) -> Option<BuiltinOutcome> {
        let span = tracing::info_span!("pipeline.exec", stages = pipeline.commands.len());
        let _enter = span.enter();

        let n = pipeline.commands.len();
        let mut pending_stdin: Option<PendingStdin> = None;
        let mut children: Vec<Child> = Vec::new();
        let mut exit_outcome = None;

        for (i, cmd) in pipeline.commands.iter().enumerate() {
            let is_last = i == n - 1;

            if cmd.is_empty() {
                pending_stdin = None;
                continue;
            }

            if self.registry.contains(&cmd.name) {
                // None of the registered built-ins read stdin, so whatever
                // fed into this stage is simply dropped.
                pending_stdin = None;

                let mut stderr_sink = OutputTarget::resolve(&cmd.stderr_redirect, Stream::Stderr);
                let mut ctx = BuiltinContext {
                    path_resolver: self.path_resolver,
                    history,
                };

                let outcome = if is_last {
                    let mut stdout_sink = OutputTarget::resolve(&cmd.stdout_redirect, Stream::Stdout);
                    self.registry
                        .dispatch(&cmd.argv, &mut stdout_sink, &mut stderr_sink, &mut ctx)
                } else {
                    let mut buf = Vec::new();
                    let outcome = self.registry.dispatch(&cmd.argv, &mut buf, &mut stderr_sink, &mut ctx);
                    pending_stdin = Some(PendingStdin::Data(buf));
                    outcome
                };

                if let Some(BuiltinOutcome::Exit(code)) = outcome {
                    exit_outcome = Some(BuiltinOutcome::Exit(code));
                }
                continue;
            }

            let Some(path) = self.path_resolver.find(&cmd.name) else {
                println!(
                    "{}",
                    ShellError::CommandNotFound {
                        name: cmd.name.clone()
                    }
                );
                pending_stdin = None;
                continue;
            };

            let mut command = StdCommand::new(&path);
            command.args(&cmd.argv[1..]);

            let mut stdin_data: Option<Vec<u8>> = None;
            match pending_stdin.take() {
                Some(PendingStdin::Process(child_stdout)) => {
                    command.stdin(Stdio::from(child_stdout));
                }
                Some(PendingStdin::Data(data)) => {
                    command.stdin(Stdio::piped());
                    stdin_data = Some(data);
                }
                None => {}
            }

            if is_last {
                command.stdout(redirect::stdio_for(&cmd.stdout_redirect, Stream::Stdout));
            } else {
                command.stdout(Stdio::piped());
            }
            command.stderr(redirect::stdio_for(&cmd.stderr_redirect, Stream::Stderr));

            match command.spawn() {
                Ok(mut child) => {
                    if let Some(data) = stdin_data {
                        if let Some(mut stdin) = child.stdin.take() {
                            let _ = stdin.write_all(&data);
                        }
                    }
                    pending_stdin = if is_last {
                        None
                    } else {
                        child.stdout.take().map(PendingStdin::Process)
                    };
                    children.push(child);
                }
                Err(err) => {
                    let spawn_err = ShellError::Spawn {
                        command: cmd.name.clone(),
                        source: err,
                    };
                    eprintln!("{spawn_err}");
                    tracing::warn!(command = %cmd.name, error = %spawn_err, "spawn failed");
                    pending_stdin = None;
                }
            }
        }

        for mut child in children {
            let _ = child.wait();
        }

        exit_outcome
    }
}

#[cfg(test)]
#[path = "../pipeline_tests.rs"]
mod tests;

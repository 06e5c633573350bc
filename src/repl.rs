// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read-eval-print loop: read a line from the line-editor collaborator,
//! lex and parse it, and dispatch to a built-in, an external process, or a
//! pipeline. The loop itself never fails; every error is caught and printed
//! at the dispatch boundary, and only `exit` or EOF ends it.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context as RlContext, Editor, Helper};

use crate::ast::Pipeline;
use crate::builtins::{BuiltinContext, BuiltinOutcome, BuiltinRegistry, COMPLETION_WHITELIST};
use crate::config::ShellConfig;
use crate::exec::{OutputTarget, PipelineExecutor, ProcessExecutor, Stream};
use crate::history::History;
use crate::lexer::Lexer;
use crate::parser;
use crate::path_resolver::PathResolver;

/// First-word completion: the built-in whitelist plus every executable
/// basename on the search path. Only offered when nothing precedes the
/// cursor but the word being completed.
#[derive(Default)]
struct ShellHelper {
    path_resolver: PathResolver,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &RlContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        if prefix.chars().any(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let mut names: Vec<String> = COMPLETION_WHITELIST
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| name.to_string())
            .collect();
        names.extend(
            self.path_resolver
                .list_all()
                .into_iter()
                .filter(|name| name.starts_with(prefix)),
        );

        let candidates = names
            .into_iter()
            .map(|name| Pair {
                replacement: format!("{name} "),
                display: name,
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}

pub struct ReplDriver {
    editor: Editor<ShellHelper, DefaultHistory>,
    registry: BuiltinRegistry,
    path_resolver: PathResolver,
    history: History,
    config: ShellConfig,
    history_file: PathBuf,
}

impl ReplDriver {
    pub fn new(config: ShellConfig, history_file: PathBuf) -> rustyline::Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(ShellHelper::default()));

        let mut history = History::with_limit(config.history_limit());
        if history.read_from_file(&history_file).is_ok() {
            for (_, line) in history.all() {
                let _ = editor.add_history_entry(line);
            }
        }

        Ok(Self {
            editor,
            registry: BuiltinRegistry::new(),
            path_resolver: PathResolver::new(),
            history,
            config,
            history_file,
        })
    }

    /// Run until `exit` or EOF, returning the process exit status.
    pub fn run(mut self) -> i32 {
        loop {
            let prompt = self.config.prompt().to_string();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !line.is_empty() {
                        self.history.push(line.clone());
                        let _ = self.editor.add_history_entry(line.as_str());
                    }

                    let tokens = Lexer::tokenize(&line);
                    let Some(pipeline) = parser::parse(tokens) else {
                        continue;
                    };

                    if let Some(code) = self.dispatch(&pipeline) {
                        self.save_history();
                        return code;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    println!();
                    self.save_history();
                    return 0;
                }
                Err(err) => {
                    eprintln!("readline error: {err}");
                    self.save_history();
                    return 1;
                }
            }
        }
    }

    fn dispatch(&mut self, pipeline: &Pipeline) -> Option<i32> {
        let span = tracing::debug_span!("line.dispatch", stages = pipeline.commands.len());
        let _enter = span.enter();

        if !pipeline.is_single() {
            let outcome = PipelineExecutor::new(&self.registry, &self.path_resolver)
                .run(pipeline, &mut self.history);
            return match outcome {
                Some(BuiltinOutcome::Exit(code)) => Some(code),
                _ => None,
            };
        }

        let cmd = &pipeline.commands[0];
        if cmd.is_empty() {
            return None;
        }

        if self.registry.contains(&cmd.name) {
            let mut stdout_sink = OutputTarget::resolve(&cmd.stdout_redirect, Stream::Stdout);
            let mut stderr_sink = OutputTarget::resolve(&cmd.stderr_redirect, Stream::Stderr);
            let mut ctx = BuiltinContext {
                path_resolver: &self.path_resolver,
                history: &mut self.history,
            };
            return match self
                .registry
                .dispatch(&cmd.argv, &mut stdout_sink, &mut stderr_sink, &mut ctx)
            {
                Some(BuiltinOutcome::Exit(code)) => Some(code),
                _ => None,
            };
        }

        ProcessExecutor::new(&self.path_resolver).run(cmd);
        None
    }

    fn save_history(&mut self) {
        if let Err(err) = self.history.write_to_file(&self.history_file) {
            tracing::warn!(path = %self.history_file.display(), error = %err, "failed to persist history");
        }
    }
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;

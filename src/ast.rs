// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The structured form a line is parsed into: a `Pipeline` of `Command`s,
//! each carrying its own redirections.

/// Whether a redirectable fd is left alone, truncated, or appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectionMode {
    #[default]
    None,
    Truncate,
    Append,
}

/// A redirection target for one fd (stdout or stderr).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FdRedirect {
    pub mode: RedirectionMode,
    pub target: String,
}

impl FdRedirect {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.mode != RedirectionMode::None
    }
}

/// A single pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// `argv[0]`, or empty if the stage has no words (redirection-only).
    pub name: String,
    /// Includes `name` at index 0.
    pub argv: Vec<String>,
    pub stdout_redirect: FdRedirect,
    pub stderr_redirect: FdRedirect,
}

impl Command {
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

/// A non-empty, ordered sequence of stages. Length 1 is the degenerate case
/// and is run as a single command, not through the pipeline executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub commands: Vec<Command>,
}

impl Pipeline {
    pub fn is_single(&self) -> bool {
        self.commands.len() == 1
    }
}

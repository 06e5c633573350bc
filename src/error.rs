// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared across the lexer, redirection driver, and process
//! executors.
//!
//! Every variant's `Display` text is the exact diagnostic specified for its
//! call site; components format nothing by hand.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    #[error("{path}: {source}")]
    RedirectOpen {
        fd: u32,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cd: {path}: No such file or directory")]
    ChangeDir { path: String },
}

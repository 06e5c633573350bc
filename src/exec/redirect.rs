// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves a parsed [`FdRedirect`] into something a caller can actually
//! write through or hand to a spawned child.
//!
//! Rust gives every writer an explicit target — unlike a fork/exec shell,
//! where "stdout" is implicitly fd 1, a built-in here takes its writer as an
//! argument. So there is no process-wide fd table to mutate and restore:
//! resolving a redirect just produces the right [`Write`] impl (or the right
//! [`Stdio`] for a child), and closing it is ordinary `Drop`.

use std::fs::{File, OpenOptions};
use std::io::{self, Stderr, Stdout, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::process::Stdio;

use crate::ast::{FdRedirect, RedirectionMode};
use crate::error::ShellError;

/// Which standard stream a redirect falls back to when it isn't set, or
/// when opening its target fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn fd(self) -> u32 {
        match self {
            Stream::Stdout => 1,
            Stream::Stderr => 2,
        }
    }
}

/// A concrete, already-resolved output destination for a built-in.
pub enum OutputTarget {
    Stdout(Stdout),
    Stderr(Stderr),
    File(File),
}

impl OutputTarget {
    /// Resolve `redirect` against `stream`. An open failure is reported to
    /// stderr and logged, then the call falls back to the inherited stream
    /// rather than failing the command — the redirect-failure policy is
    /// "run unredirected", not "abort".
    pub fn resolve(redirect: &FdRedirect, stream: Stream) -> Self {
        if !redirect.is_set() {
            return Self::inherited(stream);
        }
        match open_for(redirect, stream.fd()) {
            Ok(file) => OutputTarget::File(file),
            Err(open_err) => {
                eprintln!("{open_err}");
                tracing::warn!(
                    path = %redirect.target,
                    error = %open_err,
                    "redirect open failed, falling back to inherited stream"
                );
                Self::inherited(stream)
            }
        }
    }

    fn inherited(stream: Stream) -> Self {
        match stream {
            Stream::Stdout => OutputTarget::Stdout(io::stdout()),
            Stream::Stderr => OutputTarget::Stderr(io::stderr()),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(w) => w.write(buf),
            OutputTarget::Stderr(w) => w.write(buf),
            OutputTarget::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(w) => w.flush(),
            OutputTarget::Stderr(w) => w.flush(),
            OutputTarget::File(w) => w.flush(),
        }
    }
}

/// Resolve `redirect` into a `Stdio` suitable for a spawned child's stdout
/// or stderr. Same fallback-to-inherit policy as [`OutputTarget::resolve`].
pub fn stdio_for(redirect: &FdRedirect, stream: Stream) -> Stdio {
    if !redirect.is_set() {
        return Stdio::inherit();
    }
    match open_for(redirect, stream.fd()) {
        Ok(file) => Stdio::from(file),
        Err(open_err) => {
            eprintln!("{open_err}");
            tracing::warn!(
                path = %redirect.target,
                error = %open_err,
                "redirect open failed, falling back to inherited stream"
            );
            Stdio::inherit()
        }
    }
}

fn open_for(redirect: &FdRedirect, fd: u32) -> Result<File, ShellError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .append(redirect.mode == RedirectionMode::Append)
        .truncate(redirect.mode == RedirectionMode::Truncate)
        .mode(0o644)
        .open(&redirect.target)
        .map_err(|source| ShellError::RedirectOpen {
            fd,
            path: redirect.target.clone(),
            source,
        })
}

#[cfg(test)]
#[path = "../redirect_tests.rs"]
mod tests;

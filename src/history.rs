// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shell's own record of entered lines, independent of whatever buffer
//! the line editor keeps for up/down-arrow recall. The `history` builtin
//! operates on this copy; `ReplDriver` keeps it in sync with every
//! non-empty line it reads.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<String>,
    /// Maximum number of entries retained; oldest entries are evicted past
    /// this cap. `None` means unbounded.
    limit: Option<usize>,
    /// Count of entries evicted from the front by the cap so far; added to
    /// every reported index so indices stay stable across eviction instead
    /// of resetting to 1 when the oldest surviving entry is dropped.
    dropped: usize,
    /// Index (into `entries`) of the first entry not yet flushed by `-a`.
    unwritten_from: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history capped at `limit` entries (unbounded if `None`).
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_back(line.into());
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
                self.dropped += 1;
                self.unwritten_from = self.unwritten_from.saturating_sub(1);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in order, each paired with its 1-based index (stable
    /// across cap-driven eviction — it does not reset to 1).
    pub fn all(&self) -> impl Iterator<Item = (usize, &str)> {
        let dropped = self.dropped;
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, line)| (dropped + i + 1, line.as_str()))
    }

    /// The last `n` entries, each paired with its 1-based index.
    pub fn last(&self, n: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(n);
        let dropped = self.dropped;
        self.entries
            .iter()
            .skip(start)
            .enumerate()
            .map(move |(i, line)| (dropped + start + i + 1, line.as_str()))
    }

    /// Read lines from `path` and append each non-empty one to the history,
    /// subject to the same size cap as interactively entered lines.
    pub fn read_from_file(&mut self, path: &Path) -> io::Result<()> {
        let contents = fs::read_to_string(path)?;
        for line in contents.lines() {
            if !line.is_empty() {
                self.push(line.to_string());
            }
        }
        Ok(())
    }

    /// Overwrite `path` with the full in-memory history, one line per entry.
    pub fn write_to_file(&mut self, path: &Path) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        for line in &self.entries {
            writeln!(file, "{line}")?;
        }
        self.unwritten_from = self.entries.len();
        Ok(())
    }

    /// Append only the entries added since the last `-w` or `-a` to `path`.
    pub fn append_new_to_file(&mut self, path: &Path) -> io::Result<()> {
        let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        for line in self.entries.iter().skip(self.unwritten_from) {
            writeln!(file, "{line}")?;
        }
        self.unwritten_from = self.entries.len();
        Ok(())
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional TOML configuration: prompt string, history file location, and
//! history size cap. All fields are optional; a missing file is not an
//! error.

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_PROMPT: &str = "$ ";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShellConfig {
    prompt: Option<String>,
    history_file: Option<PathBuf>,
    history_limit: Option<usize>,
}

impl ShellConfig {
    /// Load configuration from `path`, or fall back to defaults if the file
    /// doesn't exist. A present-but-unparseable file still falls back to
    /// defaults; the shell always starts.
    pub fn load(path: &std::path::Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unparseable config file");
            Self::default()
        })
    }

    /// The default config location: `$XDG_CONFIG_HOME/posh/config.toml`,
    /// falling back to `~/.config/posh/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("posh").join("config.toml"))
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn history_file(&self) -> PathBuf {
        self.history_file.clone().unwrap_or_else(default_history_file)
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".posh_history"))
        .unwrap_or_else(|| PathBuf::from(".posh_history"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

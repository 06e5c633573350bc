// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::PathBuf;

use crate::error::ShellError;

use super::{BuiltinContext, BuiltinOutcome};

/// `cd [DIR]`. `DIR` of `~` or an absent argument changes to `$HOME`; any
/// other value is used as a literal path, resolved relative to the current
/// directory if not absolute.
pub fn run(
    argv: &[String],
    stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    _ctx: &mut BuiltinContext<'_>,
) -> BuiltinOutcome {
    let requested = argv.get(1).map(String::as_str).unwrap_or("~");
    let target = if requested == "~" {
        match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => {
                let _ = writeln!(stdout, "cd: HOME not set");
                return BuiltinOutcome::Continue;
            }
        }
    } else {
        PathBuf::from(requested)
    };

    if std::env::set_current_dir(&target).is_err() {
        let _ = writeln!(
            stdout,
            "{}",
            ShellError::ChangeDir {
                path: requested.to_string()
            }
        );
    }
    BuiltinOutcome::Continue
}

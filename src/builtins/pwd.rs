// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::{BuiltinContext, BuiltinOutcome};

pub fn run(
    _argv: &[String],
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    _ctx: &mut BuiltinContext<'_>,
) -> BuiltinOutcome {
    match std::env::current_dir() {
        Ok(dir) => {
            let _ = writeln!(stdout, "{}", dir.display());
        }
        Err(err) => {
            let _ = writeln!(stderr, "pwd: {err}");
        }
    }
    BuiltinOutcome::Continue
}

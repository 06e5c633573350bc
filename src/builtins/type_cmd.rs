// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::{BuiltinContext, BuiltinOutcome, BUILTIN_NAMES};

/// `type NAME`. Reports whether `NAME` is a built-in, an executable found on
/// `PATH`, or neither. A missing argument produces no output.
pub fn run(
    argv: &[String],
    stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    ctx: &mut BuiltinContext<'_>,
) -> BuiltinOutcome {
    let Some(name) = argv.get(1) else {
        return BuiltinOutcome::Continue;
    };

    if BUILTIN_NAMES.contains(&name.as_str()) {
        let _ = writeln!(stdout, "{name} is a shell builtin");
    } else if let Some(path) = ctx.path_resolver.find(name) {
        let _ = writeln!(stdout, "{name} is {}", path.display());
    } else {
        let _ = writeln!(stdout, "{name}: not found");
    }
    BuiltinOutcome::Continue
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::{BuiltinContext, BuiltinOutcome};

pub fn run(
    argv: &[String],
    stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    _ctx: &mut BuiltinContext<'_>,
) -> BuiltinOutcome {
    let _ = writeln!(stdout, "{}", argv[1..].join(" "));
    BuiltinOutcome::Continue
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::{BuiltinContext, BuiltinOutcome};

/// `exit [N]`. Non-numeric or missing `N` exits 0; any numeric argument is
/// reduced modulo 256, matching the process exit status convention.
pub fn run(
    argv: &[String],
    _stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    _ctx: &mut BuiltinContext<'_>,
) -> BuiltinOutcome {
    let code = argv
        .get(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .unwrap_or(0);
    BuiltinOutcome::Exit((code.rem_euclid(256)) as i32)
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::{BuiltinContext, BuiltinOutcome};

/// `history [N]`, `history -r FILE`, `history -w FILE`, `history -a FILE`.
///
/// With no argument, prints every entry. With a numeric argument, prints
/// only the last `N`. `-r` reads `FILE` into history, appending to whatever
/// is already recorded. `-w` overwrites `FILE` with the full history. `-a`
/// appends only the entries recorded since the last `-w` or `-a`.
pub fn run(
    argv: &[String],
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    ctx: &mut BuiltinContext<'_>,
) -> BuiltinOutcome {
    match argv.get(1).map(String::as_str) {
        None => print_entries(ctx, stdout, None),
        Some(flag @ ("-r" | "-w" | "-a")) => {
            let Some(path) = argv.get(2) else {
                let _ = writeln!(stderr, "history: {flag}: missing file operand");
                return BuiltinOutcome::Continue;
            };
            let path = std::path::Path::new(path);
            let result = match flag {
                "-r" => ctx.history.read_from_file(path),
                "-w" => ctx.history.write_to_file(path),
                "-a" => ctx.history.append_new_to_file(path),
                _ => unreachable!(),
            };
            if let Err(err) = result {
                let _ = writeln!(stderr, "history: {}: {err}", path.display());
            }
        }
        Some(count) => match count.parse::<usize>() {
            Ok(n) => print_entries(ctx, stdout, Some(n)),
            Err(_) => {
                let _ = writeln!(stderr, "history: {count}: numeric argument required");
            }
        },
    }
    BuiltinOutcome::Continue
}

fn print_entries(ctx: &mut BuiltinContext<'_>, stdout: &mut dyn Write, limit: Option<usize>) {
    let entries: Vec<(usize, String)> = match limit {
        Some(n) => ctx.history.last(n).map(|(i, l)| (i, l.to_string())).collect(),
        None => ctx.history.all().map(|(i, l)| (i, l.to_string())).collect(),
    };
    for (index, line) in entries {
        let _ = writeln!(stdout, "{index:>5}  {line}");
    }
}

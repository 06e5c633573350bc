// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted strings).

use super::Lexer;

impl Lexer<'_> {
    /// Consume a single-quoted segment (opening quote already consumed),
    /// appending its literal content into `word`. Content is preserved
    /// literally, including backslashes and double quotes — nothing inside
    /// `'...'` is special.
    ///
    /// An unterminated single quote is not an error: everything collected so
    /// far is appended, matching the lexer's tolerant-parsing policy.
    pub(super) fn consume_single_quote(&mut self, word: &mut String) {
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return;
            }
            word.push(ch);
        }
    }

    /// Consume a double-quoted segment (opening quote already consumed),
    /// appending its content into `word`.
    ///
    /// Only `\"` and `\\` are recognized escapes; any other backslash is
    /// preserved literally and the following character is processed as
    /// ordinary content (it is not "consumed" by the escape — see the
    /// `\n`/`\t` round-trip law in the design: `"a\nb"` lexes to `a\nb`, not
    /// `a<newline>b`).
    pub(super) fn consume_double_quote(&mut self, word: &mut String) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '"' => {
                    self.chars.next();
                    return;
                }
                '\\' => {
                    self.chars.next();
                    match self.peek_char() {
                        Some('"') => {
                            word.push('"');
                            self.chars.next();
                        }
                        Some('\\') => {
                            word.push('\\');
                            self.chars.next();
                        }
                        Some(_) => {
                            // Not a recognized escape: keep the backslash
                            // literally and leave the next character for the
                            // following loop iteration.
                            word.push('\\');
                        }
                        None => {
                            // Trailing backslash at end of input: dropped.
                        }
                    }
                }
                _ => {
                    word.push(ch);
                    self.chars.next();
                }
            }
        }
        // Unterminated double quote: accept what was collected so far.
    }
}

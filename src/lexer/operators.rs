// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator recognition: `>`, `>>`, `1>`, `1>>`, `2>`, `2>>`, `|`.
//!
//! Operators are detected only when the lexer's main loop is at a word
//! boundary — `lex_word` stops at the first operator character it sees, and
//! `next_token` dispatches straight to `lex_operator` for it, so there is an
//! implicit word boundary inserted before and after every operator without
//! either side needing to know about the other.

use super::Lexer;
use crate::token::{Operator, Token};

impl Lexer<'_> {
    /// Consume an operator starting at the current position.
    ///
    /// `fd` is `Some(1)` or `Some(2)` when the caller has already consumed a
    /// bare `1` or `2` word immediately preceding a `>` (the fd-prefix case);
    /// it is `None` for a bare `>`, `>>`, or `|` encountered directly.
    pub(super) fn lex_operator(&mut self, fd: Option<u32>) -> Token {
        match fd {
            Some(1) | Some(2) => {
                self.chars.next(); // consume '>'
                let append = self.consume_second_angle();
                Token::Operator(match (fd, append) {
                    (Some(1), false) => Operator::RedirectOut,
                    (Some(1), true) => Operator::RedirectAppend,
                    (Some(2), false) => Operator::RedirectErr,
                    (Some(2), true) => Operator::RedirectErrAppend,
                    _ => unreachable!("fd is always Some(1) or Some(2) here"),
                })
            }
            _ => match self.peek_char() {
                Some('|') => {
                    self.chars.next();
                    Token::Operator(Operator::Pipe)
                }
                Some('>') => {
                    self.chars.next();
                    let append = self.consume_second_angle();
                    Token::Operator(if append {
                        Operator::RedirectAppend
                    } else {
                        Operator::RedirectOut
                    })
                }
                other => unreachable!("lex_operator called on non-operator char {other:?}"),
            },
        }
    }

    /// If the next character is a second `>`, consume it and report append.
    fn consume_second_angle(&mut self) -> bool {
        if self.peek_char() == Some('>') {
            self.chars.next();
            true
        } else {
            false
        }
    }
}

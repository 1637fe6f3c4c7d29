// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-string tokenizer.
//!
//! A hand-rolled state machine over chars. Offsets on every [`Lexeme`] are
//! char offsets into the input, so error positions line up with what a user
//! sees rather than with UTF-8 bytes.
//!
//! ```text
//! title:foo^5 +bar -baz
//! ─────     ─  ─    ─
//! FIELD TERM BOOST PRESENCE TERM PRESENCE TERM EOS
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    Eos,
    Field,
    Term,
    EditDistance,
    Boost,
    Presence,
}

impl LexemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LexemeKind::Eos => "EOS",
            LexemeKind::Field => "FIELD",
            LexemeKind::Term => "TERM",
            LexemeKind::EditDistance => "EDIT_DISTANCE",
            LexemeKind::Boost => "BOOST",
            LexemeKind::Presence => "PRESENCE",
        }
    }
}

impl fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    /// Source text with escape backslashes removed.
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Text,
    Field,
    Term,
    EditDistance,
    Boost,
    Eos,
}

#[derive(Debug)]
pub struct QueryLexer {
    chars: Vec<char>,
    pos: usize,
    start: usize,
    lexemes: Vec<Lexeme>,
    escape_positions: Vec<usize>,
}

impl QueryLexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            start: 0,
            lexemes: Vec::new(),
            escape_positions: Vec::new(),
        }
    }

    /// Tokenize the whole input. The last lexeme is always `Eos`.
    pub fn run(mut self) -> Vec<Lexeme> {
        let mut state = Some(State::Text);
        while let Some(current) = state {
            state = match current {
                State::Text => Some(self.lex_text()),
                State::Field => Some(self.lex_field()),
                State::Term => Some(self.lex_term()),
                State::EditDistance => Some(self.lex_suffix(LexemeKind::EditDistance)),
                State::Boost => Some(self.lex_suffix(LexemeKind::Boost)),
                State::Eos => {
                    self.lex_eos();
                    None
                }
            };
        }
        self.lexemes
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    fn backup(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    fn width(&self) -> usize {
        self.pos - self.start
    }

    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn more(&self) -> bool {
        self.pos < self.chars.len()
    }

    fn emit(&mut self, kind: LexemeKind) {
        let text = (self.start..self.pos)
            .filter(|i| !self.escape_positions.contains(i))
            .map(|i| self.chars[i])
            .collect();

        self.lexemes.push(Lexeme {
            kind,
            text,
            start: self.start,
            end: self.pos,
        });
        self.start = self.pos;
    }

    fn lex_text(&mut self) -> State {
        loop {
            let Some(ch) = self.next_char() else {
                return State::Eos;
            };

            match ch {
                // The backslash is dropped later; the char after it is
                // taken literally.
                '\\' => {
                    self.escape_positions.push(self.pos - 1);
                    self.next_char();
                }
                ':' => return State::Field,
                '~' => {
                    self.backup();
                    if self.width() > 0 {
                        self.emit(LexemeKind::Term);
                    }
                    return State::EditDistance;
                }
                '^' => {
                    self.backup();
                    if self.width() > 0 {
                        self.emit(LexemeKind::Term);
                    }
                    return State::Boost;
                }
                '+' | '-' if self.width() == 1 => {
                    self.emit(LexemeKind::Presence);
                    return State::Text;
                }
                c if c == '-' || c.is_whitespace() => return State::Term,
                _ => {}
            }
        }
    }

    fn lex_field(&mut self) -> State {
        self.backup();
        self.emit(LexemeKind::Field);
        self.next_char();
        self.ignore();
        State::Text
    }

    fn lex_term(&mut self) -> State {
        self.backup();
        if self.width() > 0 {
            self.emit(LexemeKind::Term);
        }
        // One separator char
        self.next_char();
        self.ignore();

        if self.more() {
            State::Text
        } else {
            State::Eos
        }
    }

    /// `~N` and `^N`: skip the marker, take a run of ASCII digits.
    fn lex_suffix(&mut self, kind: LexemeKind) -> State {
        self.next_char();
        self.ignore();

        while let Some(ch) = self.next_char() {
            if !ch.is_ascii_digit() {
                self.backup();
                break;
            }
        }

        self.emit(kind);
        State::Text
    }

    fn lex_eos(&mut self) {
        if self.width() > 0 {
            self.emit(LexemeKind::Term);
        }
        self.emit(LexemeKind::Eos);
    }
}

/// Tokenize a query string.
pub fn lex(input: &str) -> Vec<Lexeme> {
    QueryLexer::new(input).run()
}

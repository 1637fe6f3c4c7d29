// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lexeme stream → [`Query`].
//!
//! A second state machine, one state per lexeme kind it can be looking at.
//! A clause is assembled in a [`ClauseBuilder`] and handed to the query when
//! the next clause begins (a new presence, field or term) or input ends, so
//! modifiers only ever attach to the term right before them:
//!
//! ```text
//! +title:foo~1^2 bar
//! └──── one clause ┘└ next
//! ```

use super::lexer::{lex, Lexeme, LexemeKind};
use super::{ClauseBuilder, Presence, Query};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy)]
enum State {
    Clause,
    Presence,
    Field,
    Term,
    EditDistance,
    Boost,
}

#[derive(Debug)]
pub struct QueryParser {
    lexemes: Vec<Lexeme>,
    position: usize,
    input_len: usize,
    query: Query,
    current: ClauseBuilder,
}

impl QueryParser {
    pub fn new(input: &str, query: Query) -> Self {
        Self {
            lexemes: lex(input),
            position: 0,
            input_len: input.chars().count(),
            query,
            current: ClauseBuilder::new(),
        }
    }

    /// Run to completion. Any error discards the partial query.
    pub fn parse(mut self) -> Result<Query, ParseError> {
        let mut state = Some(State::Clause);
        while let Some(current) = state {
            state = match current {
                State::Clause => self.parse_clause()?,
                State::Presence => self.parse_presence()?,
                State::Field => self.parse_field()?,
                State::Term => self.parse_term()?,
                State::EditDistance => self.parse_edit_distance()?,
                State::Boost => self.parse_boost()?,
            };
        }
        Ok(self.query)
    }

    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.position)
    }

    fn consume(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.position).cloned();
        self.position += 1;
        lexeme
    }

    fn next_clause(&mut self) {
        let completed = std::mem::take(&mut self.current);
        self.query.clause(completed);
    }

    /// Zero-width error at the end of input.
    fn at_end(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.input_len, self.input_len)
    }

    fn at(lexeme: &Lexeme, message: impl Into<String>) -> ParseError {
        ParseError::new(message, lexeme.start, lexeme.end)
    }

    fn parse_clause(&mut self) -> Result<Option<State>, ParseError> {
        let Some(lexeme) = self.peek() else {
            return Ok(None);
        };

        match lexeme.kind {
            LexemeKind::Presence => Ok(Some(State::Presence)),
            LexemeKind::Field => Ok(Some(State::Field)),
            LexemeKind::Term => Ok(Some(State::Term)),
            // Nothing (left) to parse
            LexemeKind::Eos => Ok(None),
            kind => {
                let mut message = format!("expected either a field or a term, found {kind}");
                if !lexeme.text.is_empty() {
                    message.push_str(&format!(" with value '{}'", lexeme.text));
                }
                Err(Self::at(lexeme, message))
            }
        }
    }

    fn parse_presence(&mut self) -> Result<Option<State>, ParseError> {
        let Some(lexeme) = self.consume() else {
            return Ok(None);
        };

        let presence = match lexeme.text.as_str() {
            "+" => Presence::Required,
            "-" => Presence::Prohibited,
            other => {
                return Err(Self::at(
                    &lexeme,
                    format!("unrecognised presence operator '{other}'"),
                ))
            }
        };
        self.current.presence = Some(presence);

        match self.peek() {
            None => Err(self.at_end("expecting term or field, found nothing")),
            Some(next) => match next.kind {
                LexemeKind::Field => Ok(Some(State::Field)),
                LexemeKind::Term => Ok(Some(State::Term)),
                kind => Err(Self::at(
                    next,
                    format!("expecting term or field, found '{kind}'"),
                )),
            },
        }
    }

    fn parse_field(&mut self) -> Result<Option<State>, ParseError> {
        let Some(lexeme) = self.consume() else {
            return Ok(None);
        };

        if !self.query.all_fields().contains(&lexeme.text) {
            let possible = self
                .query
                .all_fields()
                .iter()
                .map(|f| format!("'{f}'"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Self::at(
                &lexeme,
                format!(
                    "unrecognised field '{}', possible fields: {possible}",
                    lexeme.text
                ),
            ));
        }
        self.current.fields = Some(vec![lexeme.text]);

        match self.peek() {
            None => Err(self.at_end("expecting term, found nothing")),
            Some(next) => match next.kind {
                LexemeKind::Term => Ok(Some(State::Term)),
                kind => Err(Self::at(next, format!("expecting term, found '{kind}'"))),
            },
        }
    }

    fn parse_term(&mut self) -> Result<Option<State>, ParseError> {
        let Some(lexeme) = self.consume() else {
            return Ok(None);
        };

        if lexeme.text.contains('*') {
            self.current.use_pipeline = Some(false);
        }
        self.current.term = Some(lexeme.text.to_lowercase());

        self.after_term_modifier(true, true)
    }

    fn parse_edit_distance(&mut self) -> Result<Option<State>, ParseError> {
        let Some(lexeme) = self.consume() else {
            return Ok(None);
        };

        let distance = parse_number(&lexeme.text)
            .ok_or_else(|| Self::at(&lexeme, "edit distance must be numeric"))?;
        self.current.edit_distance = Some(distance as usize);

        self.after_term_modifier(false, true)
    }

    fn parse_boost(&mut self) -> Result<Option<State>, ParseError> {
        let Some(lexeme) = self.consume() else {
            return Ok(None);
        };

        let boost =
            parse_number(&lexeme.text).ok_or_else(|| Self::at(&lexeme, "boost must be numeric"))?;
        self.current.boost = Some(f64::from(boost));

        self.after_term_modifier(false, false)
    }

    /// Shared tail of term, edit distance and boost: either another modifier
    /// follows, or the clause is done.
    fn after_term_modifier(
        &mut self,
        allow_edit_distance: bool,
        allow_boost: bool,
    ) -> Result<Option<State>, ParseError> {
        let Some((kind, start, end)) = self.peek().map(|l| (l.kind, l.start, l.end)) else {
            self.next_clause();
            return Ok(None);
        };

        match kind {
            LexemeKind::EditDistance if allow_edit_distance => Ok(Some(State::EditDistance)),
            LexemeKind::Boost if allow_boost => Ok(Some(State::Boost)),
            LexemeKind::Term => {
                self.next_clause();
                Ok(Some(State::Term))
            }
            LexemeKind::Field => {
                self.next_clause();
                Ok(Some(State::Field))
            }
            LexemeKind::Presence => {
                self.next_clause();
                Ok(Some(State::Presence))
            }
            LexemeKind::Eos => {
                self.next_clause();
                Ok(None)
            }
            kind => Err(ParseError::new(
                format!("Unexpected lexeme type '{kind}'"),
                start,
                end,
            )),
        }
    }
}

/// Digit run from the lexer. Empty or out of range is not a number.
fn parse_number(text: &str) -> Option<u32> {
    text.parse::<u32>().ok()
}

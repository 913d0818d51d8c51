//! Lexing and parsing primitives shared by the data and model grammars.
//!
//! Both languages are flat streams of whitespace-separated keywords and
//! numbers with `#` line comments. Each grammar supplies its own token kind;
//! this module provides the character cursor, the number rule, the positioned
//! token stream the recursive-descent parsers consume, and the two error
//! types every grammar reports.

use std::fmt;

use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────

/// A character that matches no token rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal character '{ch}' at line {line}, column {column}")]
pub struct LexError {
    pub ch: char,
    pub line: usize,
    pub column: usize,
}

/// The token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("syntax error at token '{found}' (line {line}, column {column}): expected {expected}")]
    Unexpected {
        found: String,
        expected: String,
        line: usize,
        column: usize,
    },
    #[error("syntax error: unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
}

// ─── Tokens ──────────────────────────────────────────────────────────

/// A token together with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub token: T,
    pub line: usize,
    pub column: usize,
}

/// Positioned token sequence with one-token lookahead.
#[derive(Debug)]
pub(crate) struct TokenStream<T> {
    tokens: Vec<Spanned<T>>,
    pos: usize,
}

impl<T: PartialEq + fmt::Display> TokenStream<T> {
    pub(crate) fn new(tokens: Vec<Spanned<T>>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&Spanned<T>> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the next token, failing with end-of-input if there is none.
    pub(crate) fn bump(&mut self, expected: &str) -> Result<&Spanned<T>, SyntaxError> {
        match self.tokens.get(self.pos) {
            Some(tok) => {
                self.pos += 1;
                Ok(tok)
            }
            None => Err(SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }

    /// Consume the next token if it equals `kind`.
    pub(crate) fn expect(&mut self, kind: &T) -> Result<(), SyntaxError> {
        let expected = format!("'{kind}'");
        let tok = self.bump(&expected)?;
        if &tok.token == kind {
            Ok(())
        } else {
            Err(unexpected(tok, &expected))
        }
    }
}

/// Build a `SyntaxError::Unexpected` for `tok`.
pub(crate) fn unexpected<T: fmt::Display>(tok: &Spanned<T>, expected: &str) -> SyntaxError {
    SyntaxError::Unexpected {
        found: tok.token.to_string(),
        expected: expected.to_string(),
        line: tok.line,
        column: tok.column,
    }
}

// ─── Cursor ──────────────────────────────────────────────────────────

/// Character cursor tracking line and column.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Wrap `token` with the current position.
    pub(crate) fn spanned<T>(&self, token: T) -> Spanned<T> {
        Spanned {
            token,
            line: self.line,
            column: self.column,
        }
    }

    /// Advance past `len` bytes of the remaining input.
    pub(crate) fn advance(&mut self, len: usize) {
        let end = (self.pos + len).min(self.src.len());
        for ch in self.src[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    /// Skip whitespace and `#` comments.
    pub(crate) fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            match rest.chars().next() {
                Some(' ' | '\t' | '\r' | '\n') => self.advance(1),
                Some('#') => {
                    let len = rest.find('\n').unwrap_or(rest.len());
                    self.advance(len);
                }
                _ => return,
            }
        }
    }

    /// Lex a number literal (`[-+]?\d*\.\d+` or `[-+]?\d+`) at the cursor.
    pub(crate) fn number(&mut self) -> Option<f64> {
        let len = number_len(self.rest())?;
        let value = self.rest()[..len].parse::<f64>().ok()?;
        self.advance(len);
        Some(value)
    }

    /// Error for the character under the cursor.
    pub(crate) fn illegal(&self) -> LexError {
        LexError {
            ch: self.rest().chars().next().unwrap_or('\0'),
            line: self.line,
            column: self.column,
        }
    }
}

/// Byte length of the number literal at the start of `s`, if any.
fn number_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let int_digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > frac_start {
            return Some(j);
        }
    }
    (int_digits > 0).then_some(i)
}

//! Data-file tokenizer.
//!
//! Keywords are matched as the longest keyword prefixing the input, so a
//! keyword immediately followed by a number (`earnings5`) still splits into
//! two tokens.

use std::fmt;

use crate::metric::Metric;
use crate::syntax::{Cursor, LexError, Spanned};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataToken {
    Unit,
    Thousands,
    Millions,
    Metric(Metric),
    Number(f64),
}

impl fmt::Display for DataToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataToken::Unit => f.write_str("unit"),
            DataToken::Thousands => f.write_str("thousands"),
            DataToken::Millions => f.write_str("millions"),
            DataToken::Metric(m) => write!(f, "{m}"),
            DataToken::Number(v) => write!(f, "{v}"),
        }
    }
}

/// Keyword table, longest spelling first.
fn keywords() -> Vec<(&'static str, DataToken)> {
    let mut table: Vec<(&'static str, DataToken)> = vec![
        ("unit", DataToken::Unit),
        ("thousands", DataToken::Thousands),
        ("millions", DataToken::Millions),
    ];
    table.extend(Metric::ALL.map(|m| (m.keyword(), DataToken::Metric(m))));
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    table
}

/// Split data-file text into positioned tokens.
pub fn tokenize(src: &str) -> Result<Vec<Spanned<DataToken>>, LexError> {
    let table = keywords();
    let mut cursor = Cursor::new(src);
    let mut tokens = Vec::new();

    loop {
        cursor.skip_trivia();
        if cursor.is_eof() {
            return Ok(tokens);
        }

        let (line, column) = (cursor.line(), cursor.column());
        if let Some(value) = cursor.number() {
            tokens.push(Spanned {
                token: DataToken::Number(value),
                line,
                column,
            });
            continue;
        }

        let rest = cursor.rest();
        match table.iter().find(|(word, _)| rest.starts_with(word)) {
            Some(&(word, token)) => {
                tokens.push(cursor.spanned(token));
                cursor.advance(word.len());
            }
            None => return Err(cursor.illegal()),
        }
    }
}

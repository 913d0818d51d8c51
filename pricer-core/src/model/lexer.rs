//! Model-file tokenizer.
//!
//! Words match `[A-Za-z][A-Za-z0-9_]*`. A word spelled like a reserved keyword
//! is that keyword; any other word is a scenario identifier.

use std::fmt;

use crate::syntax::{Cursor, LexError, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum ModelToken {
    Id(String),
    Number(f64),
    Weight,
    Dcf,
    Ddm,
    Graham,
    Relative,
    Growth,
    Rfr,
    Erp,
    Years,
    Tm,
    Discrate,
    NoGrowthPe,
    Multiple,
    Book,
    Earnings,
    Revenue,
}

impl ModelToken {
    fn reserved(word: &str) -> Option<ModelToken> {
        let tok = match word {
            "weight" => ModelToken::Weight,
            "dcf" => ModelToken::Dcf,
            "ddm" => ModelToken::Ddm,
            "graham" => ModelToken::Graham,
            "relative" => ModelToken::Relative,
            "growth" => ModelToken::Growth,
            "rfr" => ModelToken::Rfr,
            "erp" => ModelToken::Erp,
            "years" => ModelToken::Years,
            "tm" => ModelToken::Tm,
            "discrate" => ModelToken::Discrate,
            "no_growth_pe" => ModelToken::NoGrowthPe,
            "multiple" => ModelToken::Multiple,
            "book" => ModelToken::Book,
            "earnings" => ModelToken::Earnings,
            "revenue" => ModelToken::Revenue,
            _ => return None,
        };
        Some(tok)
    }

    fn keyword(&self) -> Option<&'static str> {
        let word = match self {
            ModelToken::Id(_) | ModelToken::Number(_) => return None,
            ModelToken::Weight => "weight",
            ModelToken::Dcf => "dcf",
            ModelToken::Ddm => "ddm",
            ModelToken::Graham => "graham",
            ModelToken::Relative => "relative",
            ModelToken::Growth => "growth",
            ModelToken::Rfr => "rfr",
            ModelToken::Erp => "erp",
            ModelToken::Years => "years",
            ModelToken::Tm => "tm",
            ModelToken::Discrate => "discrate",
            ModelToken::NoGrowthPe => "no_growth_pe",
            ModelToken::Multiple => "multiple",
            ModelToken::Book => "book",
            ModelToken::Earnings => "earnings",
            ModelToken::Revenue => "revenue",
        };
        Some(word)
    }
}

impl fmt::Display for ModelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelToken::Id(id) => f.write_str(id),
            ModelToken::Number(v) => write!(f, "{v}"),
            other => f.write_str(other.keyword().unwrap_or_default()),
        }
    }
}

fn word_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_alphabetic) {
        return 0;
    }
    bytes
        .iter()
        .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
        .unwrap_or(bytes.len())
}

/// Split model-file text into positioned tokens.
pub fn tokenize(src: &str) -> Result<Vec<Spanned<ModelToken>>, LexError> {
    let mut cursor = Cursor::new(src);
    let mut tokens = Vec::new();

    loop {
        cursor.skip_trivia();
        if cursor.is_eof() {
            return Ok(tokens);
        }

        let len = word_len(cursor.rest());
        if len > 0 {
            let word = &cursor.rest()[..len];
            let token = ModelToken::reserved(word).unwrap_or_else(|| ModelToken::Id(word.to_string()));
            tokens.push(cursor.spanned(token));
            cursor.advance(len);
            continue;
        }

        let (line, column) = (cursor.line(), cursor.column());
        match cursor.number() {
            Some(value) => tokens.push(Spanned {
                token: ModelToken::Number(value),
                line,
                column,
            }),
            None => return Err(cursor.illegal()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<ModelToken> {
        tokenize(src).unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn relative_line() {
        assert_eq!(
            kinds("base weight 1.0 relative book multiple 1.5"),
            vec![
                ModelToken::Id("base".into()),
                ModelToken::Weight,
                ModelToken::Number(1.0),
                ModelToken::Relative,
                ModelToken::Book,
                ModelToken::Multiple,
                ModelToken::Number(1.5),
            ]
        );
    }

    #[test]
    fn identifiers_may_contain_digits_and_underscores() {
        assert_eq!(kinds("bull_case2"), vec![ModelToken::Id("bull_case2".into())]);
    }

    #[test]
    fn keyword_prefix_is_an_identifier() {
        assert_eq!(kinds("dcf2 tmx"), vec![
            ModelToken::Id("dcf2".into()),
            ModelToken::Id("tmx".into()),
        ]);
    }

    #[test]
    fn signed_numbers() {
        assert_eq!(
            kinds("-0.05 +.25 7"),
            vec![
                ModelToken::Number(-0.05),
                ModelToken::Number(0.25),
                ModelToken::Number(7.0),
            ]
        );
    }

    #[test]
    fn identifier_cannot_start_with_underscore() {
        let err = tokenize("_hidden weight 1").unwrap_err();
        assert_eq!(err.ch, '_');
    }

    #[test]
    fn display_matches_source_spelling() {
        assert_eq!(ModelToken::NoGrowthPe.to_string(), "no_growth_pe");
        assert_eq!(ModelToken::Id("x".into()).to_string(), "x");
        assert_eq!(ModelToken::Number(2.5).to_string(), "2.5");
    }
}

//! Valuation models — the model-file grammar and its error type.

pub mod lexer;
pub mod parser;

use thiserror::Error;

use crate::syntax::{LexError, SyntaxError};
use crate::valuation::RangeError;

pub use parser::parse_models;

/// Errors from reading a model file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("model file: {0}")]
    Lex(#[from] LexError),
    #[error("model file: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("model file: {0}")]
    Range(#[from] RangeError),
}

//! Company financial data — the `Data` entity and its file grammar.

pub mod lexer;
pub mod parser;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metric::Metric;
use crate::syntax::{LexError, SyntaxError};

pub use parser::parse_data;

/// Errors from reading a data file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("data file: {0}")]
    Lex(#[from] LexError),
    #[error("data file: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Scale the figures of a data file are quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    Thousands,
    Millions,
}

/// Financial metrics for one company. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub units: Units,
    pub metrics: BTreeMap<Metric, f64>,
}

impl Data {
    /// Build from `(metric, value)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs(units: Units, pairs: impl IntoIterator<Item = (Metric, f64)>) -> Self {
        Self {
            units,
            metrics: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.metrics.get(&metric).copied()
    }
}

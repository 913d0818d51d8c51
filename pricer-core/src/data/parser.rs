//! Recursive-descent parser for the data grammar:
//!
//! ```text
//! file        := "unit" scale metric_line+
//! scale       := "thousands" | "millions"
//! metric_line := METRIC NUMBER
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::metric::Metric;
use crate::syntax::{unexpected, SyntaxError, TokenStream};

use super::lexer::{tokenize, DataToken};
use super::{Data, DataError, Units};

/// Parse data-file text into a [`Data`] value.
///
/// Later occurrences of a metric overwrite earlier ones.
pub fn parse_data(src: &str) -> Result<Data, DataError> {
    let mut tokens = TokenStream::new(tokenize(src)?);

    tokens.expect(&DataToken::Unit)?;
    let units = scale(&mut tokens)?;

    let mut metrics = BTreeMap::new();
    loop {
        let (metric, value) = metric_line(&mut tokens)?;
        if let Some(previous) = metrics.insert(metric, value) {
            debug!(%metric, previous, value, "duplicate metric overrides earlier value");
        }
        if tokens.is_at_end() {
            break;
        }
    }

    debug!(?units, metrics = metrics.len(), "parsed data file");
    Ok(Data { units, metrics })
}

fn scale(tokens: &mut TokenStream<DataToken>) -> Result<Units, SyntaxError> {
    const EXPECTED: &str = "'thousands' or 'millions'";
    let tok = tokens.bump(EXPECTED)?;
    match tok.token {
        DataToken::Thousands => Ok(Units::Thousands),
        DataToken::Millions => Ok(Units::Millions),
        _ => Err(unexpected(tok, EXPECTED)),
    }
}

fn metric_line(tokens: &mut TokenStream<DataToken>) -> Result<(Metric, f64), SyntaxError> {
    let tok = tokens.bump("metric name")?;
    let DataToken::Metric(metric) = tok.token else {
        return Err(unexpected(tok, "metric name"));
    };

    let tok = tokens.bump("number")?;
    let DataToken::Number(value) = tok.token else {
        return Err(unexpected(tok, "number"));
    };

    Ok((metric, value))
}

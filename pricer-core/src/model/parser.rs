//! Recursive-descent parser for the model grammar:
//!
//! ```text
//! file   := model+
//! model  := ID "weight" NUMBER method
//! method := "dcf" "growth" NUMBER "rfr" NUMBER "erp" NUMBER "years" NUMBER ["tm" NUMBER]
//!         | "ddm" "growth" NUMBER "discrate" NUMBER "years" NUMBER
//!         | "graham" "growth" NUMBER "rfr" NUMBER "no_growth_pe" NUMBER
//!         | "relative" metric "multiple" NUMBER
//! metric := "book" | "earnings" | "revenue"
//! ```
//!
//! Parameter bounds are checked as each method is built, so an out-of-range
//! model fails before anything is valued.

use tracing::debug;

use crate::ensemble::Ensembles;
use crate::metric::Metric;
use crate::syntax::{unexpected, SyntaxError, TokenStream};
use crate::valuation::{Dcf, Ddm, Graham, Method, Relative, Valuation};

use super::lexer::{tokenize, ModelToken};
use super::ModelError;

/// Parse model-file text into scenarios grouped by valuation id.
pub fn parse_models(src: &str) -> Result<Ensembles, ModelError> {
    let mut tokens = TokenStream::new(tokenize(src)?);
    let mut ensembles = Ensembles::new();
    let mut lines = 0usize;

    loop {
        ensembles.push(model(&mut tokens)?);
        lines += 1;
        if tokens.is_at_end() {
            break;
        }
    }

    debug!(models = lines, scenarios = ensembles.len(), "parsed model file");
    Ok(ensembles)
}

fn model(tokens: &mut TokenStream<ModelToken>) -> Result<Valuation, ModelError> {
    const EXPECTED: &str = "valuation identifier";
    let tok = tokens.bump(EXPECTED)?.clone();
    let valuation_id = match tok.token {
        ModelToken::Id(id) => id,
        _ => return Err(unexpected(&tok, EXPECTED).into()),
    };

    tokens.expect(&ModelToken::Weight)?;
    let weight = number(tokens)?;
    let method = method(tokens)?;

    Ok(Valuation {
        valuation_id,
        weight,
        method,
    })
}

fn method(tokens: &mut TokenStream<ModelToken>) -> Result<Method, ModelError> {
    const EXPECTED: &str = "'dcf', 'ddm', 'graham' or 'relative'";
    let tok = tokens.bump(EXPECTED)?.clone();

    let method: Method = match tok.token {
        ModelToken::Dcf => {
            let growth = param(tokens, ModelToken::Growth)?;
            let rfr = param(tokens, ModelToken::Rfr)?;
            let erp = param(tokens, ModelToken::Erp)?;
            let years = param(tokens, ModelToken::Years)?;
            let has_tm = tokens.peek().is_some_and(|next| next.token == ModelToken::Tm);
            let tm = if has_tm {
                Some(param(tokens, ModelToken::Tm)?)
            } else {
                None
            };
            Dcf::new(growth, rfr, erp, years, tm)?.into()
        }
        ModelToken::Ddm => {
            let growth = param(tokens, ModelToken::Growth)?;
            let disc_rate = param(tokens, ModelToken::Discrate)?;
            let years = param(tokens, ModelToken::Years)?;
            Ddm::new(growth, disc_rate, years)?.into()
        }
        ModelToken::Graham => {
            let growth = param(tokens, ModelToken::Growth)?;
            let rfr = param(tokens, ModelToken::Rfr)?;
            let no_growth_pe = param(tokens, ModelToken::NoGrowthPe)?;
            Graham::new(growth, rfr, no_growth_pe)?.into()
        }
        ModelToken::Relative => {
            let metric = relative_metric(tokens)?;
            let multiple = param(tokens, ModelToken::Multiple)?;
            Relative::new(metric, multiple).into()
        }
        _ => return Err(unexpected(&tok, EXPECTED).into()),
    };
    Ok(method)
}

fn relative_metric(tokens: &mut TokenStream<ModelToken>) -> Result<Metric, SyntaxError> {
    const EXPECTED: &str = "'book', 'earnings' or 'revenue'";
    let tok = tokens.bump(EXPECTED)?;
    match tok.token {
        ModelToken::Book => Ok(Metric::Book),
        ModelToken::Earnings => Ok(Metric::Earnings),
        ModelToken::Revenue => Ok(Metric::Revenue),
        _ => Err(unexpected(tok, EXPECTED)),
    }
}

/// `keyword NUMBER`
fn param(tokens: &mut TokenStream<ModelToken>, keyword: ModelToken) -> Result<f64, SyntaxError> {
    tokens.expect(&keyword)?;
    number(tokens)
}

fn number(tokens: &mut TokenStream<ModelToken>) -> Result<f64, SyntaxError> {
    let tok = tokens.bump("number")?;
    match tok.token {
        ModelToken::Number(value) => Ok(value),
        _ => Err(unexpected(tok, "number")),
    }
}

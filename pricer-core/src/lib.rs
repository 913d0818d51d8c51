//! Pricer Core — equity value per share from an ensemble of valuation methods.
//!
//! This crate contains:
//! - The metric vocabulary shared by both input languages
//! - Data-file and model-file tokenizers and recursive-descent parsers
//! - The valuation methods (DCF, DDM, Graham, relative multiple)
//! - Scenario grouping, weight normalization, and aggregation into a report
//!
//! The core does no I/O. Callers hand it file contents and render the
//! returned [`ValuationReport`] however they like.

pub mod aggregate;
pub mod data;
pub mod ensemble;
pub mod error;
pub mod metric;
pub mod model;
pub mod report;
pub mod syntax;
pub mod valuation;

pub use aggregate::{aggregate, evaluate_ensemble, ValuationError};
pub use data::{parse_data, Data, DataError, Units};
pub use ensemble::{normalize, DegenerateEnsembleError, EnsembleValuation, Ensembles};
pub use error::PricerError;
pub use metric::Metric;
pub use model::{parse_models, ModelError};
pub use report::{ReportRow, ScenarioReport, ValuationReport};
pub use syntax::{LexError, SyntaxError};
pub use valuation::{
    Dcf, Ddm, Graham, Method, MissingMetricError, RangeError, Relative, Valuation, ValuationMethod,
};

/// Parse both inputs and value every scenario.
///
/// The model file is parsed first, so its errors take precedence.
pub fn price(data_src: &str, model_src: &str) -> Result<ValuationReport, PricerError> {
    let ensembles = parse_models(model_src)?;
    let data = parse_data(data_src)?;
    Ok(aggregate(&ensembles, &data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Data>();
        require_sync::<Data>();
        require_send::<Ensembles>();
        require_sync::<Ensembles>();
        require_send::<ValuationReport>();
        require_sync::<ValuationReport>();
        require_send::<PricerError>();
        require_sync::<PricerError>();
    }

    #[test]
    fn model_errors_win_over_data_errors() {
        let err = price("not data", "not a model").unwrap_err();
        assert!(matches!(err, PricerError::Model(_)));
    }

    #[test]
    fn data_error_surfaces() {
        let err = price("unit millions", "x weight 1 relative book multiple 1").unwrap_err();
        assert!(matches!(err, PricerError::Data(DataError::Syntax(_))));
    }

    #[test]
    fn valuation_error_surfaces() {
        let err = price(
            "unit millions shares 10",
            "x weight 1 relative book multiple 1",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "metric 'book' needed by relative not in datafile"
        );
    }
}

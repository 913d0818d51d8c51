//! Ensemble aggregator — evaluates every scenario against one data set.

use thiserror::Error;
use tracing::{debug, info};

use crate::data::Data;
use crate::ensemble::{normalize, DegenerateEnsembleError, EnsembleValuation, Ensembles};
use crate::report::{ReportRow, ScenarioReport, ValuationReport};
use crate::valuation::MissingMetricError;

/// Errors from evaluating scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuationError {
    #[error(transparent)]
    MissingMetric(#[from] MissingMetricError),
    #[error(transparent)]
    DegenerateEnsemble(#[from] DegenerateEnsembleError),
}

/// Normalize one scenario's weights and evaluate each member in order.
pub fn evaluate_ensemble(
    ensemble: &EnsembleValuation,
    data: &Data,
) -> Result<ScenarioReport, ValuationError> {
    let normalized = normalize(ensemble)?;

    let rows = normalized
        .valuation
        .iter()
        .map(|v| -> Result<ReportRow, MissingMetricError> {
            let eval = v.evaluate(data)?;
            debug!(
                valuation_id = %v.valuation_id,
                method = v.method_name(),
                weight = v.weight,
                value = eval.value,
                "evaluated method"
            );
            Ok(ReportRow::new(v.method_name(), eval.notes, v.weight, eval.value))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let report = ScenarioReport::from_rows(normalized.valuation_id, rows);
    info!(valuation_id = %report.valuation_id, total = report.total, "scenario valued");
    Ok(report)
}

/// Evaluate every scenario. Any failure aborts the whole report.
pub fn aggregate(ensembles: &Ensembles, data: &Data) -> Result<ValuationReport, ValuationError> {
    let scenarios = ensembles
        .iter()
        .map(|e| evaluate_ensemble(e, data))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValuationReport {
        units: data.units,
        scenarios,
    })
}

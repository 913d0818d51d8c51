//! Pre-computed valuation report handed to renderers.
//!
//! Everything a renderer needs is here; it never calls back into the engine.

use serde::{Deserialize, Serialize};

use crate::data::Units;

/// One method's contribution to a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Method tag ("dcf", "ddm", ...).
    pub method: String,
    pub notes: String,
    /// `"<method> (<notes>)"`, as shown in the Method column.
    pub label: String,
    /// Normalized weight.
    pub weight: f64,
    /// Per-share value.
    pub value: f64,
}

impl ReportRow {
    pub fn new(method: &str, notes: String, weight: f64, value: f64) -> Self {
        Self {
            label: format!("{method} ({notes})"),
            method: method.to_string(),
            notes,
            weight,
            value,
        }
    }

    pub fn contribution(&self) -> f64 {
        self.weight * self.value
    }
}

/// Rows and weighted total for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub valuation_id: String,
    pub rows: Vec<ReportRow>,
    pub total: f64,
}

impl ScenarioReport {
    /// Build from rows; `total` is `Σ weight * value` in row order.
    pub fn from_rows(valuation_id: impl Into<String>, rows: Vec<ReportRow>) -> Self {
        let total: f64 = rows.iter().map(ReportRow::contribution).sum();
        Self {
            valuation_id: valuation_id.into(),
            rows,
            total,
        }
    }

    pub fn weight_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.weight).sum()
    }
}

/// Per-scenario results, in first-seen scenario order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub units: Units,
    pub scenarios: Vec<ScenarioReport>,
}

impl ValuationReport {
    pub fn get(&self, valuation_id: &str) -> Option<&ScenarioReport> {
        self.scenarios
            .iter()
            .find(|s| s.valuation_id == valuation_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioReport> {
        self.scenarios.iter()
    }
}

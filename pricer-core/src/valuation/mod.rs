//! Valuation engine — per-share intrinsic value from one method and a `Data` set.
//!
//! Each method is its own struct implementing [`ValuationMethod`]. `appraise`
//! returns the value together with a method-specific trace, and `notes` is a
//! pure function of that trace, so notes never depend on call ordering.
//! [`Method`] closes the set for exhaustive dispatch.

pub mod dcf;
pub mod ddm;
pub mod graham;
pub mod relative;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::Data;
use crate::metric::Metric;

pub use dcf::{Dcf, DcfTrace};
pub use ddm::Ddm;
pub use graham::{Graham, GrahamTrace};
pub use relative::Relative;

// ─── Errors ──────────────────────────────────────────────────────────

/// A method needs a metric the data file does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("metric '{metric}' needed by {method} not in datafile")]
pub struct MissingMetricError {
    pub metric: Metric,
    pub method: &'static str,
}

/// Side of a violated parameter bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::AtLeast(min) => write!(f, ">= {min}"),
            Bound::AtMost(max) => write!(f, "<= {max}"),
        }
    }
}

/// A method parameter outside its declared bound.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} must be {bound} (got {value})")]
pub struct RangeError {
    pub field: &'static str,
    pub bound: Bound,
    pub value: f64,
}

/// Require `value` in `[-1, 1]`.
pub(crate) fn unit_interval(field: &'static str, value: f64) -> Result<(), RangeError> {
    if value < -1.0 {
        return Err(RangeError {
            field,
            bound: Bound::AtLeast(-1.0),
            value,
        });
    }
    if value > 1.0 {
        return Err(RangeError {
            field,
            bound: Bound::AtMost(1.0),
            value,
        });
    }
    Ok(())
}

/// Require `value >= 0`.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<(), RangeError> {
    if value < 0.0 {
        return Err(RangeError {
            field,
            bound: Bound::AtLeast(0.0),
            value,
        });
    }
    Ok(())
}

/// Fetch `metrics` from `data` in order, failing on the first one missing.
pub(crate) fn fetch<const N: usize>(
    data: &Data,
    metrics: [Metric; N],
    method: &'static str,
) -> Result<[f64; N], MissingMetricError> {
    let mut values = [0.0; N];
    for (slot, metric) in values.iter_mut().zip(metrics) {
        *slot = data
            .get(metric)
            .ok_or(MissingMetricError { metric, method })?;
    }
    Ok(values)
}

/// Number of whole forecast periods in a `years` parameter.
///
/// `years` is non-negative once a method is built; the cast saturates only
/// past `u64::MAX`.
pub(crate) fn whole_periods(years: f64) -> u64 {
    years.floor() as u64
}

// ─── Method trait ────────────────────────────────────────────────────

/// Value produced by a method plus whatever it derived along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appraisal<T> {
    pub value: f64,
    pub trace: T,
}

/// A single valuation method.
pub trait ValuationMethod: Send + Sync {
    /// Method-specific values derived while appraising.
    type Trace;

    /// Method tag as written in model files (e.g. "dcf").
    fn name(&self) -> &'static str;

    /// Metrics `appraise` reads, in the order they are checked.
    fn required_metrics(&self) -> Vec<Metric>;

    /// Compute the per-share value.
    fn appraise(&self, data: &Data) -> Result<Appraisal<Self::Trace>, MissingMetricError>;

    /// Human-readable parameter summary.
    fn notes(&self, appraisal: &Appraisal<Self::Trace>) -> String;
}

/// Value and notes of one method against one data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: f64,
    pub notes: String,
}

fn evaluate_with<M: ValuationMethod>(method: &M, data: &Data) -> Result<Evaluation, MissingMetricError> {
    let appraisal = method.appraise(data)?;
    Ok(Evaluation {
        notes: method.notes(&appraisal),
        value: appraisal.value,
    })
}

// ─── Closed method set ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Method {
    Dcf(Dcf),
    Ddm(Ddm),
    Graham(Graham),
    Relative(Relative),
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Dcf(m) => m.name(),
            Method::Ddm(m) => m.name(),
            Method::Graham(m) => m.name(),
            Method::Relative(m) => m.name(),
        }
    }

    pub fn required_metrics(&self) -> Vec<Metric> {
        match self {
            Method::Dcf(m) => m.required_metrics(),
            Method::Ddm(m) => m.required_metrics(),
            Method::Graham(m) => m.required_metrics(),
            Method::Relative(m) => m.required_metrics(),
        }
    }

    /// Value and notes in one pass.
    pub fn evaluate(&self, data: &Data) -> Result<Evaluation, MissingMetricError> {
        match self {
            Method::Dcf(m) => evaluate_with(m, data),
            Method::Ddm(m) => evaluate_with(m, data),
            Method::Graham(m) => evaluate_with(m, data),
            Method::Relative(m) => evaluate_with(m, data),
        }
    }

    pub fn value(&self, data: &Data) -> Result<f64, MissingMetricError> {
        self.evaluate(data).map(|e| e.value)
    }

    pub fn notes(&self, data: &Data) -> Result<String, MissingMetricError> {
        self.evaluate(data).map(|e| e.notes)
    }
}

impl From<Dcf> for Method {
    fn from(m: Dcf) -> Self {
        Method::Dcf(m)
    }
}

impl From<Ddm> for Method {
    fn from(m: Ddm) -> Self {
        Method::Ddm(m)
    }
}

impl From<Graham> for Method {
    fn from(m: Graham) -> Self {
        Method::Graham(m)
    }
}

impl From<Relative> for Method {
    fn from(m: Relative) -> Self {
        Method::Relative(m)
    }
}

// ─── Valuation ───────────────────────────────────────────────────────

/// One weighted method line of a model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub valuation_id: String,
    pub weight: f64,
    pub method: Method,
}

impl Valuation {
    pub fn new(valuation_id: impl Into<String>, weight: f64, method: impl Into<Method>) -> Self {
        Self {
            valuation_id: valuation_id.into(),
            weight,
            method: method.into(),
        }
    }

    /// Method tag, one of "dcf", "ddm", "graham", "relative".
    pub fn method_name(&self) -> &'static str {
        self.method.name()
    }

    pub fn evaluate(&self, data: &Data) -> Result<Evaluation, MissingMetricError> {
        self.method.evaluate(data)
    }

    pub fn value(&self, data: &Data) -> Result<f64, MissingMetricError> {
        self.method.value(data)
    }

    pub fn notes(&self, data: &Data) -> Result<String, MissingMetricError> {
        self.method.notes(data)
    }
}

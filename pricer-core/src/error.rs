//! Top-level error for a full pricing run.

use thiserror::Error;

use crate::aggregate::ValuationError;
use crate::data::DataError;
use crate::model::ModelError;

/// Any failure that aborts a run. There is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricerError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

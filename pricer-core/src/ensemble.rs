//! Scenario grouping and weight normalization.
//!
//! Model lines sharing a valuation id form one [`EnsembleValuation`]. Groups
//! keep the order their id was first seen; members keep model-file order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::valuation::Valuation;

/// All weights of a scenario sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("valuation '{valuation_id}': weights sum to zero, cannot normalize")]
pub struct DegenerateEnsembleError {
    pub valuation_id: String,
}

/// A named scenario: weighted valuation methods in model-file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleValuation {
    pub valuation_id: String,
    pub valuation: Vec<Valuation>,
}

impl EnsembleValuation {
    pub fn new(valuation_id: impl Into<String>) -> Self {
        Self {
            valuation_id: valuation_id.into(),
            valuation: Vec::new(),
        }
    }

    pub fn weight_sum(&self) -> f64 {
        self.valuation.iter().map(|v| v.weight).sum()
    }
}

/// Return a copy of `ensemble` whose weights are scaled to sum to one.
///
/// Each weight becomes `weight * (1 / weight_sum)`. The input is untouched,
/// so normalizing an already normalized ensemble is a no-op up to rounding.
pub fn normalize(ensemble: &EnsembleValuation) -> Result<EnsembleValuation, DegenerateEnsembleError> {
    let weight_sum = ensemble.weight_sum();
    if weight_sum == 0.0 {
        return Err(DegenerateEnsembleError {
            valuation_id: ensemble.valuation_id.clone(),
        });
    }

    let weight_mult = 1.0 / weight_sum;
    let valuation = ensemble
        .valuation
        .iter()
        .map(|v| Valuation {
            weight: v.weight * weight_mult,
            ..v.clone()
        })
        .collect();

    Ok(EnsembleValuation {
        valuation_id: ensemble.valuation_id.clone(),
        valuation,
    })
}

/// Scenarios keyed by valuation id, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ensembles {
    groups: Vec<EnsembleValuation>,
}

impl Ensembles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `valuation` to its scenario, creating the scenario if unseen.
    pub fn push(&mut self, valuation: Valuation) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.valuation_id == valuation.valuation_id)
        {
            Some(group) => group.valuation.push(valuation),
            None => {
                let mut group = EnsembleValuation::new(valuation.valuation_id.clone());
                group.valuation.push(valuation);
                self.groups.push(group);
            }
        }
    }

    pub fn get(&self, valuation_id: &str) -> Option<&EnsembleValuation> {
        self.groups.iter().find(|g| g.valuation_id == valuation_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnsembleValuation> {
        self.groups.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.valuation_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Valuation> for Ensembles {
    fn from_iter<I: IntoIterator<Item = Valuation>>(iter: I) -> Self {
        let mut ensembles = Ensembles::new();
        for valuation in iter {
            ensembles.push(valuation);
        }
        ensembles
    }
}

impl<'a> IntoIterator for &'a Ensembles {
    type Item = &'a EnsembleValuation;
    type IntoIter = std::slice::Iter<'a, EnsembleValuation>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

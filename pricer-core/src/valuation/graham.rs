//! Graham's revised intrinsic value formula.
//!
//! `V = EPS * (no_growth_pe + 2g) * 4.4 / Y`, with `g` in percent and `Y` the
//! risk-free rate in percent. The implied growth in the notes is a fixed
//! formula over price per share and is not re-derived from `V`.

use serde::{Deserialize, Serialize};

use crate::data::Data;
use crate::metric::Metric;

use super::{fetch, unit_interval, Appraisal, MissingMetricError, RangeError, ValuationMethod};

const REQUIRED: [Metric; 3] = [Metric::Eps, Metric::Mktcap, Metric::Shares];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graham {
    pub growth: f64,
    pub rfr: f64,
    pub no_growth_pe: f64,
}

impl Graham {
    pub fn new(growth: f64, rfr: f64, no_growth_pe: f64) -> Result<Self, RangeError> {
        unit_interval("growth", growth)?;
        unit_interval("rfr", rfr)?;
        Ok(Self {
            growth,
            rfr,
            no_growth_pe,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahamTrace {
    pub implied_growth: f64,
}

impl ValuationMethod for Graham {
    type Trace = GrahamTrace;

    fn name(&self) -> &'static str {
        "graham"
    }

    fn required_metrics(&self) -> Vec<Metric> {
        REQUIRED.to_vec()
    }

    fn appraise(&self, data: &Data) -> Result<Appraisal<GrahamTrace>, MissingMetricError> {
        let [eps, mktcap, shares] = fetch(data, REQUIRED, self.name())?;

        let v = eps * (self.no_growth_pe + 200.0 * self.growth);
        let value = (v * 4.4) / (100.0 * self.rfr);

        let pps = mktcap / shares;
        let implied_growth =
            (pps * (self.rfr * 100.0) / (4.4 * eps)) - (self.no_growth_pe * 100.0) / 2.0;

        Ok(Appraisal {
            value,
            trace: GrahamTrace { implied_growth },
        })
    }

    fn notes(&self, appraisal: &Appraisal<GrahamTrace>) -> String {
        format!(
            "growth={:.2}%, rfr={:.2}%, implied growth={:.2}%",
            self.growth * 100.0,
            self.rfr * 100.0,
            appraisal.trace.implied_growth
        )
    }
}

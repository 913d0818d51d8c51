//! Relative valuation — a per-share metric times a target multiple.

use serde::{Deserialize, Serialize};

use crate::data::Data;
use crate::metric::Metric;

use super::{fetch, Appraisal, MissingMetricError, ValuationMethod};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relative {
    pub metric: Metric,
    pub multiple: f64,
}

impl Relative {
    pub fn new(metric: Metric, multiple: f64) -> Self {
        Self { metric, multiple }
    }

    fn required(&self) -> [Metric; 2] {
        [self.metric, Metric::Shares]
    }
}

impl ValuationMethod for Relative {
    type Trace = ();

    fn name(&self) -> &'static str {
        "relative"
    }

    fn required_metrics(&self) -> Vec<Metric> {
        self.required().to_vec()
    }

    fn appraise(&self, data: &Data) -> Result<Appraisal<()>, MissingMetricError> {
        let [metric, shares] = fetch(data, self.required(), self.name())?;
        Ok(Appraisal {
            value: (metric / shares) * self.multiple,
            trace: (),
        })
    }

    fn notes(&self, _appraisal: &Appraisal<()>) -> String {
        format!("metric={}, multiple={:.2}", self.metric, self.multiple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Units;

    #[test]
    fn book_multiple() {
        let data = Data::from_pairs(Units::Millions, [(Metric::Shares, 100.0), (Metric::Book, 500.0)]);
        let rel = Relative::new(Metric::Book, 1.5);
        let a = rel.appraise(&data).unwrap();
        assert_eq!(a.value, 7.5);
        assert_eq!(rel.notes(&a), "metric=book, multiple=1.50");
    }

    #[test]
    fn missing_target_metric_checked_before_shares() {
        let data = Data::from_pairs(Units::Millions, [(Metric::Book, 500.0)]);
        let err = Relative::new(Metric::Earnings, 12.0).appraise(&data).unwrap_err();
        assert_eq!(err.metric, Metric::Earnings);
        assert_eq!(err.method, "relative");
    }

    #[test]
    fn missing_shares() {
        let data = Data::from_pairs(Units::Millions, [(Metric::Revenue, 500.0)]);
        let err = Relative::new(Metric::Revenue, 2.0).appraise(&data).unwrap_err();
        assert_eq!(err.metric, Metric::Shares);
    }
}

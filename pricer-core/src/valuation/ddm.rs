//! Dividend discount model over a finite horizon (no terminal value).

use serde::{Deserialize, Serialize};

use crate::data::Data;
use crate::metric::Metric;

use super::{
    fetch, non_negative, unit_interval, whole_periods, Appraisal, MissingMetricError, RangeError,
    ValuationMethod,
};

const REQUIRED: [Metric; 1] = [Metric::Dividend];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ddm {
    pub growth: f64,
    pub disc_rate: f64,
    pub years: f64,
}

impl Ddm {
    pub fn new(growth: f64, disc_rate: f64, years: f64) -> Result<Self, RangeError> {
        unit_interval("growth", growth)?;
        unit_interval("discrate", disc_rate)?;
        non_negative("years", years)?;
        Ok(Self {
            growth,
            disc_rate,
            years,
        })
    }
}

impl ValuationMethod for Ddm {
    type Trace = ();

    fn name(&self) -> &'static str {
        "ddm"
    }

    fn required_metrics(&self) -> Vec<Metric> {
        REQUIRED.to_vec()
    }

    fn appraise(&self, data: &Data) -> Result<Appraisal<()>, MissingMetricError> {
        let [dividend] = fetch(data, REQUIRED, self.name())?;
        let mut value = 0.0;
        let mut grown = 1.0;
        let mut discount = 1.0;
        for _ in 0..whole_periods(self.years) {
            grown *= 1.0 + self.growth;
            discount *= 1.0 + self.disc_rate;
            value += dividend * grown / discount;
        }
        Ok(Appraisal { value, trace: () })
    }

    fn notes(&self, _appraisal: &Appraisal<()>) -> String {
        format!(
            "growth={:.2}%, discount={:.2}%, years={}",
            self.growth * 100.0,
            self.disc_rate * 100.0,
            whole_periods(self.years)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Units;

    fn dividend(d: f64) -> Data {
        Data::from_pairs(Units::Millions, [(Metric::Dividend, d)])
    }

    #[test]
    fn three_year_sum() {
        let ddm = Ddm::new(0.05, 0.10, 3.0).unwrap();
        let value = ddm.appraise(&dividend(2.0)).unwrap().value;
        let expected = 2.0 * 1.05 / 1.10
            + 2.0 * 1.05_f64.powi(2) / 1.10_f64.powi(2)
            + 2.0 * 1.05_f64.powi(3) / 1.10_f64.powi(3);
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_years_is_zero() {
        let ddm = Ddm::new(0.05, 0.10, 0.0).unwrap();
        assert_eq!(ddm.appraise(&dividend(2.0)).unwrap().value, 0.0);
    }

    #[test]
    fn equal_growth_and_discount_sums_dividends() {
        let ddm = Ddm::new(0.07, 0.07, 4.0).unwrap();
        let value = ddm.appraise(&dividend(1.5)).unwrap().value;
        assert!((value - 6.0).abs() < 1e-12);
    }

    #[test]
    fn notes_format() {
        let ddm = Ddm::new(0.05, 0.10, 3.5).unwrap();
        let a = ddm.appraise(&dividend(2.0)).unwrap();
        assert_eq!(ddm.notes(&a), "growth=5.00%, discount=10.00%, years=3");
    }

    #[test]
    fn notes_keep_horizon_past_i32_range() {
        let ddm = Ddm::new(0.0, 0.1, 3_000_000_000.0).unwrap();
        let a = Appraisal { value: 0.0, trace: () };
        assert_eq!(ddm.notes(&a), "growth=0.00%, discount=10.00%, years=3000000000");
    }

    #[test]
    fn needs_dividend() {
        let data = Data::from_pairs(Units::Millions, [(Metric::Eps, 1.0)]);
        let err = Ddm::new(0.0, 0.1, 1.0).unwrap().appraise(&data).unwrap_err();
        assert_eq!(err.metric, Metric::Dividend);
        assert_eq!(err.method, "ddm");
    }

    #[test]
    fn range_checks() {
        assert_eq!(Ddm::new(-1.2, 0.1, 1.0).unwrap_err().field, "growth");
        assert_eq!(Ddm::new(0.1, 1.2, 1.0).unwrap_err().field, "discrate");
        assert_eq!(Ddm::new(0.1, 0.1, -0.5).unwrap_err().field, "years");
    }
}

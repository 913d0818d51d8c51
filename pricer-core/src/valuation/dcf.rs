//! Discounted cash flow.
//!
//! Free cash flow is grown for `floor(years)` periods and discounted at the
//! weighted average cost of capital. The terminal value is a multiple of the
//! final period's cash flow: the model's `tm` if given, otherwise the
//! multiple the market currently implies, `(mktcap + debt - cash) / fcf`.

use serde::{Deserialize, Serialize};

use crate::data::Data;
use crate::metric::Metric;

use super::{
    fetch, non_negative, unit_interval, whole_periods, Appraisal, MissingMetricError, RangeError,
    ValuationMethod,
};

const REQUIRED: [Metric; 16] = [
    Metric::Earnings,
    Metric::DAndA,
    Metric::Capex,
    Metric::ChangeInv,
    Metric::ChangeAr,
    Metric::ChangeAp,
    Metric::PrincipalRepaid,
    Metric::InterestExpense,
    Metric::Beta,
    Metric::DefaultSpread,
    Metric::TaxRate,
    Metric::Equity,
    Metric::Debt,
    Metric::Mktcap,
    Metric::Cash,
    Metric::Shares,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dcf {
    pub growth: f64,
    pub rfr: f64,
    pub erp: f64,
    pub years: f64,
    /// Terminal multiple; `None` means use the market-implied multiple.
    pub tm: Option<f64>,
}

impl Dcf {
    pub fn new(
        growth: f64,
        rfr: f64,
        erp: f64,
        years: f64,
        tm: Option<f64>,
    ) -> Result<Self, RangeError> {
        unit_interval("growth", growth)?;
        unit_interval("rfr", rfr)?;
        unit_interval("erp", erp)?;
        non_negative("years", years)?;
        if let Some(tm) = tm {
            non_negative("tm", tm)?;
        }
        Ok(Self {
            growth,
            rfr,
            erp,
            years,
            tm,
        })
    }
}

/// Intermediate results of a DCF appraisal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DcfTrace {
    /// The multiple actually applied to the terminal cash flow.
    pub terminal_multiple: f64,
}

impl ValuationMethod for Dcf {
    type Trace = DcfTrace;

    fn name(&self) -> &'static str {
        "dcf"
    }

    fn required_metrics(&self) -> Vec<Metric> {
        REQUIRED.to_vec()
    }

    fn appraise(&self, data: &Data) -> Result<Appraisal<DcfTrace>, MissingMetricError> {
        let [
            earnings,
            d_and_a,
            capex,
            change_inv,
            change_ar,
            change_ap,
            principal_repaid,
            interest_expense,
            beta,
            default_spread,
            tax_rate,
            equity,
            debt,
            mktcap,
            cash,
            shares,
        ] = fetch(data, REQUIRED, self.name())?;

        let fcf = earnings + d_and_a
            - (capex + change_inv + change_ar + change_ap + principal_repaid + interest_expense);
        let cost_of_equity = self.rfr + beta * self.erp;
        let after_tax_cod = (self.rfr + default_spread) * (1.0 - tax_rate);
        let capital = equity + debt;
        let wacc = cost_of_equity * (equity / capital) + after_tax_cod * (debt / capital);
        let implied_tm = (mktcap + debt - cash) / fcf;

        let mut iv = fcf;
        let mut last = fcf;
        let mut discount = 1.0;
        for _ in 0..whole_periods(self.years) {
            last *= 1.0 + self.growth;
            discount *= 1.0 + wacc;
            iv += last / discount;
        }

        let terminal_multiple = self.tm.unwrap_or(implied_tm);
        iv += terminal_multiple * last / discount;

        Ok(Appraisal {
            value: iv / shares,
            trace: DcfTrace { terminal_multiple },
        })
    }

    fn notes(&self, appraisal: &Appraisal<DcfTrace>) -> String {
        format!(
            "growth={:.2}%, rfr={:.2}%, erp={:.2}%, years={}, tm={:.2}",
            self.growth * 100.0,
            self.rfr * 100.0,
            self.erp * 100.0,
            whole_periods(self.years),
            appraisal.trace.terminal_multiple
        )
    }
}

//! Metric vocabulary — the closed set of financial quantities a data file may carry.
//!
//! Keywords are case-sensitive and exact. The same names are used by the
//! `relative` valuation method in the model grammar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized financial metric name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Dividend,
    Earnings,
    Eps,
    DAndA,
    Capex,
    ChangeInv,
    ChangeAr,
    ChangeAp,
    PrincipalRepaid,
    InterestExpense,
    DefaultSpread,
    TaxRate,
    Equity,
    Debt,
    Mktcap,
    Cash,
    Shares,
    Book,
    Beta,
    Revenue,
}

impl Metric {
    /// Every metric, in vocabulary order.
    pub const ALL: [Metric; 20] = [
        Metric::Dividend,
        Metric::Earnings,
        Metric::Eps,
        Metric::DAndA,
        Metric::Capex,
        Metric::ChangeInv,
        Metric::ChangeAr,
        Metric::ChangeAp,
        Metric::PrincipalRepaid,
        Metric::InterestExpense,
        Metric::DefaultSpread,
        Metric::TaxRate,
        Metric::Equity,
        Metric::Debt,
        Metric::Mktcap,
        Metric::Cash,
        Metric::Shares,
        Metric::Book,
        Metric::Beta,
        Metric::Revenue,
    ];

    /// The keyword spelling used in data and model files.
    pub fn keyword(self) -> &'static str {
        match self {
            Metric::Dividend => "dividend",
            Metric::Earnings => "earnings",
            Metric::Eps => "eps",
            Metric::DAndA => "d_and_a",
            Metric::Capex => "capex",
            Metric::ChangeInv => "change_inv",
            Metric::ChangeAr => "change_ar",
            Metric::ChangeAp => "change_ap",
            Metric::PrincipalRepaid => "principal_repaid",
            Metric::InterestExpense => "interest_expense",
            Metric::DefaultSpread => "default_spread",
            Metric::TaxRate => "tax_rate",
            Metric::Equity => "equity",
            Metric::Debt => "debt",
            Metric::Mktcap => "mktcap",
            Metric::Cash => "cash",
            Metric::Shares => "shares",
            Metric::Book => "book",
            Metric::Beta => "beta",
            Metric::Revenue => "revenue",
        }
    }

    /// Look up a metric by its exact keyword.
    pub fn from_keyword(word: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.keyword() == word)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

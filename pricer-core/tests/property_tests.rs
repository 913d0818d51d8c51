//! Property tests for parser and aggregation invariants.
//!
//! Uses proptest to verify:
//! 1. Parse determinism — the same data text always yields equal `Data`
//! 2. Last write wins — duplicate metric lines keep the final value
//! 3. Weight normalization — weights sum to one and the total is Σ wᵢvᵢ
//! 4. DCF idempotence — appraising twice gives bit-identical results
//! 5. Range enforcement — growth outside [-1, 1] never parses

use std::collections::BTreeMap;

use pricer_core::{
    aggregate, parse_data, parse_models, Data, Dcf, Ensembles, Metric, ModelError, Relative, Units,
    Valuation,
};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(Metric::ALL.to_vec())
}

fn arb_value() -> impl Strategy<Value = f64> {
    (-1.0e6..1.0e6_f64).prop_map(|v| (v * 1000.0).round() / 1000.0)
}

fn arb_lines() -> impl Strategy<Value = Vec<(Metric, f64)>> {
    prop::collection::vec((arb_metric(), arb_value()), 1..30)
}

fn data_text(scale: &str, lines: &[(Metric, f64)]) -> String {
    let mut text = format!("unit {scale}\n");
    for (metric, value) in lines {
        text.push_str(&format!("{metric} {value}  # note\n"));
    }
    text
}

fn dcf_data() -> Data {
    Data::from_pairs(
        Units::Millions,
        [
            (Metric::Earnings, 120.0),
            (Metric::DAndA, 15.0),
            (Metric::Capex, 25.0),
            (Metric::ChangeInv, 2.0),
            (Metric::ChangeAr, 1.0),
            (Metric::ChangeAp, -1.0),
            (Metric::PrincipalRepaid, 5.0),
            (Metric::InterestExpense, 3.0),
            (Metric::Beta, 1.1),
            (Metric::DefaultSpread, 0.015),
            (Metric::TaxRate, 0.21),
            (Metric::Equity, 900.0),
            (Metric::Debt, 300.0),
            (Metric::Mktcap, 1500.0),
            (Metric::Cash, 60.0),
            (Metric::Shares, 50.0),
        ],
    )
}

// ── 1 + 2. Data parsing ──────────────────────────────────────────────

proptest! {
    #[test]
    fn parsing_is_deterministic(lines in arb_lines(), millions in prop::bool::ANY) {
        let text = data_text(if millions { "millions" } else { "thousands" }, &lines);
        let first = parse_data(&text).unwrap();
        let second = parse_data(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn last_metric_line_wins(lines in arb_lines()) {
        let text = data_text("thousands", &lines);
        let data = parse_data(&text).unwrap();

        let mut expected = BTreeMap::new();
        for (metric, value) in &lines {
            expected.insert(*metric, *value);
        }
        prop_assert_eq!(data.metrics, expected);
        prop_assert_eq!(data.units, Units::Thousands);
    }
}

// ── 3. Weight normalization ──────────────────────────────────────────

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(
        members in prop::collection::vec((0.01..100.0_f64, 0.1..10.0_f64), 1..8),
    ) {
        let data = Data::from_pairs(Units::Millions, [(Metric::Shares, 7.0), (Metric::Book, 350.0)]);
        let ensembles: Ensembles = members
            .iter()
            .map(|&(weight, multiple)| Valuation::new("s", weight, Relative::new(Metric::Book, multiple)))
            .collect();

        let report = aggregate(&ensembles, &data).unwrap();
        let scenario = report.get("s").unwrap();

        prop_assert_eq!(scenario.rows.len(), members.len());
        prop_assert!((scenario.weight_sum() - 1.0).abs() < 1e-9);
        let recomputed: f64 = scenario.rows.iter().map(|r| r.weight * r.value).sum();
        prop_assert_eq!(scenario.total, recomputed);
    }
}

// ── 4. DCF idempotence ───────────────────────────────────────────────

proptest! {
    #[test]
    fn dcf_value_is_idempotent(
        growth in -0.5..0.5_f64,
        rfr in 0.0..0.1_f64,
        erp in 0.0..0.1_f64,
        years in 0.0..30.0_f64,
        tm in prop::option::of(0.0..40.0_f64),
    ) {
        let valuation = Valuation::new("d", 1.0, Dcf::new(growth, rfr, erp, years, tm).unwrap());
        let data = dcf_data();
        let first = valuation.value(&data).unwrap();
        let second = valuation.value(&data).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(valuation.notes(&data).unwrap(), valuation.notes(&data).unwrap());
    }
}

// ── 5. Range enforcement ─────────────────────────────────────────────

fn arb_out_of_range() -> impl Strategy<Value = f64> {
    prop_oneof![(1.001..50.0_f64), (-50.0..-1.001_f64)]
        .prop_map(|v| (v * 1000.0).round() / 1000.0)
}

proptest! {
    #[test]
    fn growth_outside_unit_interval_is_rejected(growth in arb_out_of_range(), which in 0..3usize) {
        let line = match which {
            0 => format!("x weight 1 dcf growth {growth} rfr 0.04 erp 0.05 years 5"),
            1 => format!("x weight 1 ddm growth {growth} discrate 0.1 years 5"),
            _ => format!("x weight 1 graham growth {growth} rfr 0.04 no_growth_pe 8.5"),
        };
        let err = parse_models(&line).unwrap_err();
        prop_assert!(matches!(err, ModelError::Range(ref e) if e.field == "growth"));
    }
}

//! Plain-text tables for a `ValuationReport`.
//!
//! Layout per scenario:
//!
//! ```text
//! Valuation: base
//! +---------------------------------------+--------+-------+
//! | Method                                | Weight | Value |
//! +---------------------------------------+--------+-------+
//! | relative (metric=book, multiple=1.50) |   1.00 |  7.50 |
//! | ------------------------------------- | ------ | ----- |
//! | Total                                 |   1.00 |  7.50 |
//! +---------------------------------------+--------+-------+
//! ```

use pricer_core::{ScenarioReport, ValuationReport};

const HEADER: [&str; 3] = ["Method", "Weight", "Value"];

enum Row {
    Cells([String; 3]),
    Rule,
}

fn number(v: f64) -> String {
    format!("{v:.2}")
}

/// Render every scenario, separated by blank lines.
pub fn render_report(report: &ValuationReport) -> String {
    let mut out = String::from("\n");
    for scenario in report.iter() {
        out.push_str(&format!("Valuation: {}\n", scenario.valuation_id));
        out.push_str(&render_scenario(scenario));
        out.push('\n');
    }
    out
}

/// Render one scenario as a boxed table with a Total row.
pub fn render_scenario(scenario: &ScenarioReport) -> String {
    let mut rows: Vec<Row> = scenario
        .rows
        .iter()
        .map(|r| Row::Cells([r.label.clone(), number(r.weight), number(r.value)]))
        .collect();
    rows.push(Row::Rule);
    rows.push(Row::Cells([
        "Total".to_string(),
        number(1.0),
        number(scenario.total),
    ]));

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        if let Row::Cells(cells) = row {
            for (w, cell) in widths.iter_mut().zip(cells) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let border = {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+\n", segments.join("+"))
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&line(&HEADER.map(String::from), &widths));
    out.push_str(&border);
    for row in &rows {
        match row {
            Row::Cells(cells) => out.push_str(&line(cells, &widths)),
            Row::Rule => out.push_str(&line(&widths.map(|w| "-".repeat(w)), &widths)),
        }
    }
    out.push_str(&border);
    out
}

fn line(cells: &[String; 3], widths: &[usize; 3]) -> String {
    format!(
        "| {:<w0$} | {:>w1$} | {:>w2$} |\n",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::{ReportRow, Units};

    fn single() -> ScenarioReport {
        ScenarioReport::from_rows(
            "base",
            vec![ReportRow::new(
                "relative",
                "metric=book, multiple=1.50".into(),
                1.0,
                7.5,
            )],
        )
    }

    #[test]
    fn table_layout() {
        let expected = "\
+---------------------------------------+--------+-------+
| Method                                | Weight | Value |
+---------------------------------------+--------+-------+
| relative (metric=book, multiple=1.50) |   1.00 |  7.50 |
| ------------------------------------- | ------ | ----- |
| Total                                 |   1.00 |  7.50 |
+---------------------------------------+--------+-------+
";
        assert_eq!(render_scenario(&single()), expected);
    }

    #[test]
    fn wide_values_stretch_columns() {
        let scenario = ScenarioReport::from_rows(
            "big",
            vec![ReportRow::new("ddm", "n".into(), 1.0, 123456.789)],
        );
        let table = render_scenario(&scenario);
        assert!(table.contains("| 123456.79 |"));
        assert!(table.lines().all(|l| l.len() == table.lines().next().unwrap().len()));
    }

    #[test]
    fn report_lists_scenarios_in_order() {
        let mut second = single();
        second.valuation_id = "alt".into();
        let report = ValuationReport {
            units: Units::Millions,
            scenarios: vec![single(), second],
        };
        let text = render_report(&report);
        let base = text.find("Valuation: base").unwrap();
        let alt = text.find("Valuation: alt").unwrap();
        assert!(base < alt);
    }
}

use serde::{Deserialize, Serialize};

use crate::comparison::{BetterOption, ComparisonOutput};
use crate::types::Percent;

/// One row of the export table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub metric: String,
    pub scenario_a: String,
    pub scenario_b: String,
}

/// The tabular structure the export adapter consumes.
///
/// Values are plain decimal text; currency formatting, CSV quoting and the
/// print-to-PDF trigger are the adapter's concern, not the engine's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsTable {
    pub rows: Vec<MetricsRow>,
}

impl MetricsTable {
    /// Column headers, in the order the row fields serialize.
    pub fn headers() -> [&'static str; 3] {
        ["metric", "scenario_a", "scenario_b"]
    }
}

/// Build the NPV / ROI / better-option table from an evaluation.
///
/// Row order is stable: NPV first, then ROI, then the decision.
pub fn metrics_table(output: &ComparisonOutput) -> MetricsTable {
    let (better_a, better_b) = match output.better_option {
        BetterOption::ScenarioA => ("better", ""),
        BetterOption::ScenarioB => ("", "better"),
        BetterOption::Equal => ("equal", "equal"),
    };

    let rows = vec![
        MetricsRow {
            metric: "npv".into(),
            scenario_a: output.scenario_a.npv.normalize().to_string(),
            scenario_b: output.scenario_b.npv.normalize().to_string(),
        },
        MetricsRow {
            metric: "roi_pct".into(),
            scenario_a: roi_cell(&output.scenario_a.roi),
            scenario_b: roi_cell(&output.scenario_b.roi),
        },
        MetricsRow {
            metric: "better_option".into(),
            scenario_a: better_a.into(),
            scenario_b: better_b.into(),
        },
    ];

    MetricsTable { rows }
}

fn roi_cell(roi: &Option<Percent>) -> String {
    match roi {
        // normalize strips trailing zeros so cells read "-20", not "-20.0"
        Some(v) => v.normalize().to_string(),
        None => String::new(),
    }
}

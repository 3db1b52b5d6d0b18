use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::engine::{npv, roi, series};
use crate::scenario::Scenario;
use crate::types::{with_metadata, ComputationOutput, Currency, Money, Percent};
use crate::InvestCompareResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which of the two options comes out ahead on NPV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetterOption {
    ScenarioA,
    ScenarioB,
    Equal,
}

/// One option's own cost parameters. The shared horizon and discount rate
/// live on [`ComparisonInput`], which keeps the two scenarios on a single
/// horizon by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCosts {
    /// Total cost at year 0 (a purchase + renovation split is summed by
    /// the caller before it reaches the engine).
    pub initial_cost: Money,
    /// Nominal operating cost per year.
    pub annual_cost: Money,
    /// Value realized at the end of the horizon.
    #[serde(default)]
    pub residual_value: Money,
}

impl ScenarioCosts {
    /// Attach the shared horizon and rate, yielding a standalone scenario.
    pub fn to_scenario(&self, years: u32, discount_rate: Percent) -> Scenario {
        Scenario {
            initial_cost: self.initial_cost,
            annual_cost: self.annual_cost,
            years,
            residual_value: self.residual_value,
            discount_rate,
        }
    }
}

/// Input for a two-scenario evaluation, mirroring the page's form layout:
/// shared settings first, then each option's own costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// Shared horizon in years, driving both scenarios.
    pub years: u32,
    /// Shared discount rate as a percentage (5.0 = 5%).
    pub discount_rate: Percent,
    /// Option A (the new build).
    pub scenario_a: ScenarioCosts,
    /// Option B (the renovation).
    pub scenario_b: ScenarioCosts,
    /// Reporting currency.
    #[serde(default)]
    pub currency: Currency,
}

/// Everything the page needs about one scenario after an input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    /// Discounted net present value.
    pub npv: Money,
    /// Terminal-vs-initial ROI in percent. None when the initial cost is
    /// zero; that degradation is reported as a warning, not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<Percent>,
    /// Cumulative nominal cost per year (not discounted).
    pub cumulative: Vec<Money>,
    /// Signed cash flow per year.
    pub cashflows: Vec<Money>,
}

/// Output of the two-scenario evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub scenario_a: ScenarioMetrics,
    pub scenario_b: ScenarioMetrics,
    /// NPV-based decision; exact equality maps to `Equal`.
    pub better_option: BetterOption,
    /// Largest value across both cumulative series, for chart scaling.
    pub cumulative_max: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Decide the better option from two NPVs.
///
/// Equality is exact. NPVs here are cost-dominated negative quantities, so
/// the higher (less negative) one wins.
pub fn compare(npv_a: Money, npv_b: Money) -> BetterOption {
    if npv_a == npv_b {
        BetterOption::Equal
    } else if npv_a > npv_b {
        BetterOption::ScenarioA
    } else {
        BetterOption::ScenarioB
    }
}

/// Evaluate both scenarios from one input snapshot.
///
/// This is the recompute-on-demand entry point the presentation layer calls
/// after every input change. It holds no state between calls; every output
/// is derived fresh from the snapshot it is given.
pub fn evaluate(
    input: &ComparisonInput,
) -> InvestCompareResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let a = input.scenario_a.to_scenario(input.years, input.discount_rate);
    let b = input.scenario_b.to_scenario(input.years, input.discount_rate);

    let metrics_a = scenario_metrics(&a, "scenario_a", &mut warnings)?;
    let metrics_b = scenario_metrics(&b, "scenario_b", &mut warnings)?;

    let better_option = compare(metrics_a.npv, metrics_b.npv);

    let cumulative_max = metrics_a
        .cumulative
        .iter()
        .chain(metrics_b.cumulative.iter())
        .copied()
        .max()
        .unwrap_or(Decimal::ZERO);

    let output = ComparisonOutput {
        scenario_a: metrics_a,
        scenario_b: metrics_b,
        better_option,
        cumulative_max,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Two-scenario DCF comparison (end-of-year discounting)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn scenario_metrics(
    scenario: &Scenario,
    label: &str,
    warnings: &mut Vec<String>,
) -> InvestCompareResult<ScenarioMetrics> {
    let npv_value = npv::npv(scenario)?;

    // A zero initial cost makes the ROI ratio undefined but leaves every
    // other metric meaningful; degrade to None instead of failing the
    // whole evaluation.
    let roi_value = if scenario.initial_cost.is_zero() {
        warnings.push(format!("{label}: ROI is undefined for a zero initial cost"));
        None
    } else {
        Some(roi::roi(scenario)?)
    };

    Ok(ScenarioMetrics {
        npv: npv_value,
        roi: roi_value,
        cumulative: series::cumulative_series(scenario),
        cashflows: series::cashflow_series(scenario),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_input() -> ComparisonInput {
        ComparisonInput {
            years: 20,
            discount_rate: dec!(5),
            scenario_a: ScenarioCosts {
                initial_cost: dec!(250_000),
                annual_cost: dec!(1_800),
                residual_value: dec!(200_000),
            },
            scenario_b: ScenarioCosts {
                initial_cost: dec!(160_000) + dec!(90_000),
                annual_cost: dec!(2_400),
                residual_value: dec!(170_000),
            },
            currency: Currency::EUR,
        }
    }

    #[test]
    fn test_compare_higher_npv_wins() {
        assert_eq!(
            compare(dec!(-100_000), dec!(-120_000)),
            BetterOption::ScenarioA
        );
        assert_eq!(
            compare(dec!(-120_000), dec!(-100_000)),
            BetterOption::ScenarioB
        );
    }

    #[test]
    fn test_compare_exact_equality() {
        assert_eq!(compare(dec!(-5), dec!(-5)), BetterOption::Equal);
        // A minimal difference still decides
        assert_eq!(
            compare(dec!(-5), dec!(-5.0000000001)),
            BetterOption::ScenarioA
        );
    }

    #[test]
    fn test_evaluate_sample() {
        let result = evaluate(&sample_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.scenario_a.cumulative.len(), 21);
        assert_eq!(out.scenario_b.cashflows.len(), 21);
        // Same initial cost, higher operating cost and lower residual on
        // the renovation side: the new build wins at 5%.
        assert_eq!(out.better_option, BetterOption::ScenarioA);
        assert!(out.scenario_a.npv > out.scenario_b.npv);
        // Chart max is the larger final cumulative total
        assert_eq!(
            out.cumulative_max,
            dec!(250_000) + dec!(2_400) * dec!(20)
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_evaluate_identical_scenarios_equal() {
        let mut input = sample_input();
        input.scenario_b = input.scenario_a.clone();
        let result = evaluate(&input).unwrap();
        assert_eq!(result.result.better_option, BetterOption::Equal);
    }

    #[test]
    fn test_evaluate_zero_initial_cost_degrades_roi() {
        let mut input = sample_input();
        input.scenario_b.initial_cost = Decimal::ZERO;
        let result = evaluate(&input).unwrap();

        assert!(result.result.scenario_b.roi.is_none());
        assert!(result.result.scenario_a.roi.is_some());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("scenario_b"));
    }

    #[test]
    fn test_evaluate_invalid_rate_rejected() {
        let mut input = sample_input();
        input.discount_rate = dec!(-100);
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn test_evaluate_roi_values() {
        let result = evaluate(&sample_input()).unwrap();
        let out = &result.result;
        // (200000 - 250000) / 250000 * 100 = -20%
        assert_eq!(out.scenario_a.roi, Some(dec!(-20)));
        // (170000 - 250000) / 250000 * 100 = -32%
        assert_eq!(out.scenario_b.roi, Some(dec!(-32)));
    }
}

use invest_compare_core::comparison::{
    self, BetterOption, ComparisonInput, ScenarioCosts,
};
use invest_compare_core::engine::{npv, roi, series};
use invest_compare_core::export;
use invest_compare_core::sensitivity::{self, SensitivityInput};
use invest_compare_core::types::Currency;
use invest_compare_core::Scenario;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn build_scenario() -> Scenario {
    Scenario {
        initial_cost: dec!(250_000),
        annual_cost: dec!(1_800),
        years: 20,
        residual_value: dec!(200_000),
        discount_rate: dec!(5),
    }
}

fn reno_scenario() -> Scenario {
    Scenario {
        initial_cost: dec!(160_000) + dec!(90_000),
        annual_cost: dec!(2_400),
        years: 20,
        residual_value: dec!(170_000),
        discount_rate: dec!(5),
    }
}

fn comparison_input() -> ComparisonInput {
    ComparisonInput {
        years: 20,
        discount_rate: dec!(5),
        scenario_a: ScenarioCosts {
            initial_cost: dec!(250_000),
            annual_cost: dec!(1_800),
            residual_value: dec!(200_000),
        },
        scenario_b: ScenarioCosts {
            initial_cost: dec!(250_000),
            annual_cost: dec!(2_400),
            residual_value: dec!(170_000),
        },
        currency: Currency::EUR,
    }
}

// ===========================================================================
// NPV
// ===========================================================================

#[test]
fn test_npv_reference_value() {
    // -250000 - sum_{t=1..20} 1800/1.05^t + 200000/1.05^20
    //   = -250000 - 22431.98 + 75377.90 = -197054.08
    let result = npv::npv(&build_scenario()).unwrap();
    assert!(
        (result - dec!(-197054.08)).abs() < dec!(0.01),
        "expected -197054.08 to the cent, got {result}"
    );
}

#[test]
fn test_npv_discounting_is_irrelevant_without_future_flows() {
    for years in [0u32, 1, 5, 50] {
        for rate in [dec!(0), dec!(5), dec!(25), dec!(-50)] {
            let s = Scenario {
                initial_cost: dec!(180_000),
                annual_cost: Decimal::ZERO,
                years,
                residual_value: Decimal::ZERO,
                discount_rate: rate,
            };
            assert_eq!(npv::npv(&s).unwrap(), dec!(-180_000));
        }
    }
}

#[test]
fn test_npv_zero_horizon_never_adds_residual() {
    let mut s = build_scenario();
    s.years = 0;
    assert_eq!(npv::npv(&s).unwrap(), dec!(-250_000));
}

#[test]
fn test_npv_rejects_rate_at_or_below_minus_100() {
    for rate in [dec!(-100), dec!(-100.01), dec!(-250)] {
        let mut s = build_scenario();
        s.discount_rate = rate;
        assert!(npv::npv(&s).is_err(), "rate {rate} should be rejected");
    }
}

// ===========================================================================
// Series
// ===========================================================================

#[test]
fn test_cumulative_series_shape() {
    let s = build_scenario();
    let series = series::cumulative_series(&s);

    assert_eq!(series.len(), 21);
    assert_eq!(series[0], s.initial_cost);
    for pair in series.windows(2) {
        assert!(pair[0] <= pair[1], "series must be non-decreasing");
    }
}

#[test]
fn test_cashflow_series_reconciles_with_nominal_totals() {
    for s in [build_scenario(), reno_scenario()] {
        let flows = series::cashflow_series(&s);
        assert_eq!(flows.len(), s.years as usize + 1);

        let total: Decimal = flows.iter().copied().sum();
        assert_eq!(
            total,
            -s.initial_cost - s.annual_cost * Decimal::from(s.years) + s.residual_value
        );
    }
}

// ===========================================================================
// ROI
// ===========================================================================

#[test]
fn test_roi_break_even() {
    let mut s = build_scenario();
    s.residual_value = s.initial_cost;
    assert_eq!(roi::roi(&s).unwrap(), Decimal::ZERO);
}

#[test]
fn test_roi_zero_initial_cost_rejected() {
    let mut s = build_scenario();
    s.initial_cost = Decimal::ZERO;
    assert!(roi::roi(&s).is_err());
}

// ===========================================================================
// Comparison
// ===========================================================================

#[test]
fn test_less_negative_npv_wins() {
    assert_eq!(
        comparison::compare(dec!(-100_000), dec!(-120_000)),
        BetterOption::ScenarioA
    );
}

#[test]
fn test_evaluate_full_snapshot() {
    let result = comparison::evaluate(&comparison_input()).unwrap();
    let out = &result.result;

    assert_eq!(out.better_option, BetterOption::ScenarioA);
    assert_eq!(out.scenario_a.cumulative.len(), 21);
    assert_eq!(out.scenario_a.cashflows.len(), 21);
    assert_eq!(out.scenario_b.cumulative.len(), 21);
    assert_eq!(out.scenario_a.roi, Some(dec!(-20)));
    assert_eq!(
        out.cumulative_max,
        dec!(250_000) + dec!(2_400) * dec!(20)
    );
}

#[test]
fn test_evaluate_degrades_roi_on_zero_initial_cost() {
    let mut input = comparison_input();
    input.scenario_a.initial_cost = Decimal::ZERO;

    let result = comparison::evaluate(&input).unwrap();
    assert!(result.result.scenario_a.roi.is_none());
    assert_eq!(result.warnings.len(), 1);
}

// ===========================================================================
// Sensitivity
// ===========================================================================

#[test]
fn test_sweep_zero_delta_reproduces_base_npvs() {
    let input = SensitivityInput {
        base_rate: dec!(5),
        scenario_a: build_scenario(),
        scenario_b: reno_scenario(),
        deltas: None,
    };
    let result = sensitivity::sensitivity_sweep(&input).unwrap();
    let zero_row = &result.result.rows[2];

    assert_eq!(zero_row.delta, Decimal::ZERO);
    assert_eq!(zero_row.rate, dec!(5));
    assert_eq!(zero_row.npv_a, npv::npv(&build_scenario()).unwrap());
    assert_eq!(zero_row.npv_b, npv::npv(&reno_scenario()).unwrap());
}

#[test]
fn test_sweep_floors_tiny_rates() {
    let input = SensitivityInput {
        base_rate: dec!(0.1),
        scenario_a: build_scenario(),
        scenario_b: reno_scenario(),
        deltas: None,
    };
    let result = sensitivity::sensitivity_sweep(&input).unwrap();
    assert_eq!(result.result.rows[0].rate, dec!(0.1));
}

#[test]
fn test_sweep_rejects_mismatched_horizons() {
    let mut b = reno_scenario();
    b.years = 15;
    let input = SensitivityInput {
        base_rate: dec!(5),
        scenario_a: build_scenario(),
        scenario_b: b,
        deltas: None,
    };
    assert!(sensitivity::sensitivity_sweep(&input).is_err());
}

#[test]
fn test_sweep_npvs_fall_as_rate_rises() {
    // Residual-heavy scenarios lose more PV than they save on costs when
    // the rate climbs, so NPV declines across the default deltas.
    let input = SensitivityInput {
        base_rate: dec!(5),
        scenario_a: build_scenario(),
        scenario_b: reno_scenario(),
        deltas: None,
    };
    let rows = sensitivity::sensitivity_sweep(&input).unwrap().result.rows;
    for pair in rows.windows(2) {
        assert!(pair[0].npv_a > pair[1].npv_a);
        assert!(pair[0].npv_b > pair[1].npv_b);
    }
}

// ===========================================================================
// Export
// ===========================================================================

#[test]
fn test_metrics_table_rows() {
    let result = comparison::evaluate(&comparison_input()).unwrap();
    let table = export::metrics_table(&result.result);

    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0].metric, "npv");
    assert_eq!(table.rows[1].metric, "roi_pct");
    assert_eq!(table.rows[2].metric, "better_option");
    assert_eq!(table.rows[1].scenario_a, "-20");
    assert_eq!(table.rows[2].scenario_a, "better");
    assert_eq!(export::MetricsTable::headers(), ["metric", "scenario_a", "scenario_b"]);
}

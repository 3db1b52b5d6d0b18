use crate::scenario::Scenario;
use crate::types::Money;

/// Cumulative nominal cost per year, index = year, length `years + 1`.
///
/// These are undiscounted running totals used to chart raw cost
/// accumulation. They are deliberately not comparable with the discounted
/// NPV figure.
pub fn cumulative_series(scenario: &Scenario) -> Vec<Money> {
    let mut series = Vec::with_capacity(scenario.years as usize + 1);
    let mut total = scenario.initial_cost;
    series.push(total);
    for _ in 1..=scenario.years {
        total += scenario.annual_cost;
        series.push(total);
    }
    series
}

/// Signed cash flow per year, index = year, length `years + 1`.
///
/// Negative is an outflow. The residual value arrives inside the final
/// year's flow, not as an extra entry, so the last year can turn positive
/// when the residual exceeds the annual cost.
pub fn cashflow_series(scenario: &Scenario) -> Vec<Money> {
    let mut flows = Vec::with_capacity(scenario.years as usize + 1);
    flows.push(-scenario.initial_cost);
    for t in 1..=scenario.years {
        let mut flow = -scenario.annual_cost;
        if t == scenario.years {
            flow += scenario.residual_value;
        }
        flows.push(flow);
    }
    flows
}

use rust_decimal_macros::dec;

use crate::error::InvestCompareError;
use crate::scenario::Scenario;
use crate::types::Percent;
use crate::InvestCompareResult;

/// Terminal-vs-initial return on investment, as a percentage.
///
/// Deliberately simplified: `(residual - initial) / initial * 100`,
/// independent of the discount rate and of annual operating costs. This is
/// not an internal rate of return.
pub fn roi(scenario: &Scenario) -> InvestCompareResult<Percent> {
    scenario.validate()?;

    if scenario.initial_cost.is_zero() {
        return Err(InvestCompareError::InvalidInput {
            field: "initial_cost".into(),
            reason: "ROI is undefined for a zero initial cost".into(),
        });
    }

    Ok((scenario.residual_value - scenario.initial_cost) / scenario.initial_cost * dec!(100))
}

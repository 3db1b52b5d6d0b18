use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::InvestCompareError;
use crate::scenario::Scenario;
use crate::types::Money;
use crate::InvestCompareResult;

/// Net present value of a scenario.
///
/// Sign convention: the initial and annual costs enter negative, the residual
/// value positive. "Better" always means the higher (less negative) NPV.
///
/// A rate at or below -100% is rejected up front; the discount base would be
/// zero or negative from year 1 on.
pub fn npv(scenario: &Scenario) -> InvestCompareResult<Money> {
    scenario.validate()?;

    let r = scenario.rate_fraction();
    if r <= dec!(-1) {
        return Err(InvestCompareError::InvalidInput {
            field: "discount_rate".into(),
            reason: "Discount rate must be greater than -100%".into(),
        });
    }

    let one_plus_r = Decimal::ONE + r;
    let mut result = -scenario.initial_cost;
    let mut discount = Decimal::ONE;

    for t in 1..=scenario.years {
        discount *= one_plus_r;
        if discount.is_zero() {
            return Err(InvestCompareError::DivisionByZero {
                context: format!("NPV discount factor at year {t}"),
            });
        }
        result -= scenario.annual_cost / discount;
    }

    // The residual value lands at the end of the horizon. A zero horizon
    // never receives it, even when non-zero. A zero residual is skipped as
    // an arithmetic no-op only.
    if scenario.years > 0 && !scenario.residual_value.is_zero() {
        result += scenario.residual_value / discount;
    }

    Ok(result)
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::InvestCompareError;
use crate::types::{Money, Percent, Rate};
use crate::InvestCompareResult;

/// One investment option over the analysis horizon.
///
/// Costs are nominal. The discount rate is carried the way the input form
/// holds it (5.0 = 5%) and converted to a fraction inside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Total cost incurred at year 0. The engine does not care how this is
    /// composed; a purchase + renovation split is summed by the caller.
    pub initial_cost: Money,
    /// Nominal operating cost at the end of each year 1..=years. Constant,
    /// no escalation.
    pub annual_cost: Money,
    /// Horizon length in years.
    pub years: u32,
    /// Value realized at the end of the final year. May be zero.
    #[serde(default)]
    pub residual_value: Money,
    /// Discount rate as a percentage (5.0 = 5%).
    pub discount_rate: Percent,
}

impl Scenario {
    /// Discount rate as a fraction (5.0 -> 0.05).
    pub fn rate_fraction(&self) -> Rate {
        self.discount_rate / dec!(100)
    }

    /// Same scenario with a different discount rate; used by the sweep.
    pub fn with_discount_rate(&self, discount_rate: Percent) -> Scenario {
        Scenario {
            discount_rate,
            ..self.clone()
        }
    }

    /// Reject inputs the engine is not defined over.
    pub fn validate(&self) -> InvestCompareResult<()> {
        if self.initial_cost < Decimal::ZERO {
            return Err(InvestCompareError::InvalidInput {
                field: "initial_cost".into(),
                reason: "Initial cost must be non-negative".into(),
            });
        }
        if self.annual_cost < Decimal::ZERO {
            return Err(InvestCompareError::InvalidInput {
                field: "annual_cost".into(),
                reason: "Annual cost must be non-negative".into(),
            });
        }
        Ok(())
    }
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::engine::npv;
use crate::error::InvestCompareError;
use crate::scenario::Scenario;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::InvestCompareResult;

/// Deltas applied when the caller does not supply a set, in percent of the
/// base rate.
pub const DEFAULT_DELTAS: [Percent; 5] =
    [dec!(-20), dec!(-10), dec!(0), dec!(10), dec!(20)];

/// Adjusted rates never fall below this floor, in percent. It keeps the
/// swept rate positive and away from the NPV error path.
const MIN_RATE_PCT: Decimal = dec!(0.1);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for the discount-rate sensitivity sweep.
///
/// Both scenarios are swept over the same adjusted rate; their own
/// `discount_rate` fields are ignored in favor of `base_rate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityInput {
    /// Base discount rate in percent, shared by both scenarios.
    pub base_rate: Percent,
    pub scenario_a: Scenario,
    pub scenario_b: Scenario,
    /// Multiplicative rate perturbations in percent. Defaults to
    /// [-20, -10, 0, 10, 20] when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deltas: Option<Vec<Percent>>,
}

/// One charted point of the sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityRow {
    /// The perturbation applied, in percent of the base rate.
    pub delta: Percent,
    /// The adjusted discount rate in percent, after the floor.
    pub rate: Percent,
    pub npv_a: Money,
    pub npv_b: Money,
}

/// Output of the sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityOutput {
    /// Rows in the caller's delta order; the chart draws them left to
    /// right and that ordering is user-visible.
    pub rows: Vec<SensitivityRow>,
    /// Smallest NPV across both scenarios and all rows, for chart scaling.
    pub npv_min: Money,
    /// Largest NPV across both scenarios and all rows.
    pub npv_max: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Recompute both NPVs across multiplicative perturbations of the base
/// discount rate: `adjusted = max(0.1, base * (1 + delta/100))`.
pub fn sensitivity_sweep(
    input: &SensitivityInput,
) -> InvestCompareResult<ComputationOutput<SensitivityOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    if input.scenario_a.years != input.scenario_b.years {
        return Err(InvestCompareError::InvalidInput {
            field: "years".into(),
            reason: "Both scenarios must share one horizon".into(),
        });
    }

    let deltas: Vec<Percent> = match input.deltas {
        Some(ref d) => d.clone(),
        None => DEFAULT_DELTAS.to_vec(),
    };
    if deltas.is_empty() {
        return Err(InvestCompareError::InvalidInput {
            field: "deltas".into(),
            reason: "At least one delta is required".into(),
        });
    }

    let mut rows = Vec::with_capacity(deltas.len());
    for delta in deltas {
        let rate = adjusted_rate(input.base_rate, delta);
        let npv_a = npv::npv(&input.scenario_a.with_discount_rate(rate))?;
        let npv_b = npv::npv(&input.scenario_b.with_discount_rate(rate))?;
        rows.push(SensitivityRow {
            delta,
            rate,
            npv_a,
            npv_b,
        });
    }

    let all_npvs: Vec<Money> = rows.iter().flat_map(|r| [r.npv_a, r.npv_b]).collect();
    let npv_min = all_npvs.iter().copied().min().unwrap_or(Decimal::ZERO);
    let npv_max = all_npvs.iter().copied().max().unwrap_or(Decimal::ZERO);

    let output = SensitivityOutput {
        rows,
        npv_min,
        npv_max,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discount-rate sensitivity sweep (multiplicative deltas, 0.1% floor)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn adjusted_rate(base: Percent, delta: Percent) -> Percent {
    let scaled = base * (Decimal::ONE + delta / dec!(100));
    scaled.max(MIN_RATE_PCT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

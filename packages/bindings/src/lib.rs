use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Two-scenario evaluation
// ---------------------------------------------------------------------------

/// Evaluate both scenarios from one input snapshot. The page calls this on
/// every input change and re-renders from the returned JSON.
#[napi]
pub fn evaluate_comparison(input_json: String) -> NapiResult<String> {
    let input: invest_compare_core::comparison::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        invest_compare_core::comparison::evaluate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Single-scenario metrics
// ---------------------------------------------------------------------------

#[napi]
pub fn scenario_npv(input_json: String) -> NapiResult<String> {
    let scenario: invest_compare_core::Scenario =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let value = invest_compare_core::engine::npv::npv(&scenario).map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "npv": value })).map_err(to_napi_error)
}

#[napi]
pub fn scenario_roi(input_json: String) -> NapiResult<String> {
    let scenario: invest_compare_core::Scenario =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let value = invest_compare_core::engine::roi::roi(&scenario).map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "roi_pct": value })).map_err(to_napi_error)
}

#[napi]
pub fn scenario_series(input_json: String) -> NapiResult<String> {
    let scenario: invest_compare_core::Scenario =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let cumulative = invest_compare_core::engine::series::cumulative_series(&scenario);
    let cashflows = invest_compare_core::engine::series::cashflow_series(&scenario);
    serde_json::to_string(&serde_json::json!({
        "cumulative": cumulative,
        "cashflows": cashflows,
    }))
    .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Sensitivity
// ---------------------------------------------------------------------------

#[napi]
pub fn sensitivity_sweep(input_json: String) -> NapiResult<String> {
    let input: invest_compare_core::sensitivity::SensitivityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = invest_compare_core::sensitivity::sensitivity_sweep(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Evaluate both scenarios and return the metric table the page's CSV and
/// print exports consume.
#[napi]
pub fn metrics_table(input_json: String) -> NapiResult<String> {
    let input: invest_compare_core::comparison::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let evaluation =
        invest_compare_core::comparison::evaluate(&input).map_err(to_napi_error)?;
    let table = invest_compare_core::export::metrics_table(&evaluation.result);
    serde_json::to_string(&table).map_err(to_napi_error)
}

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::flows::{catalog, run_flow, Flow, FlowSummary};
use crate::forms::fields::parse_submission;
use crate::state::AppState;

/// GET /api/v1/advisory
pub async fn handle_list_flows() -> Json<Vec<FlowSummary>> {
    Json(catalog())
}

/// POST /api/v1/advisory/{slug}
///
/// Validates the input, makes a single model call and returns the parsed output.
pub async fn handle_run_flow<F: Flow>(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<F::Output>, AppError> {
    let input: F::Input = parse_submission(body)?;
    let output = run_flow::<F>(state.runner.as_ref(), &input).await?;
    Ok(Json(output))
}

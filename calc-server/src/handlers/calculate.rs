//! Calculator handler

use axum::body::Bytes;
use axum::Json;
use calc_core::{CalcError, CalculationRequest, CalculationResult};
use serde_json::Value;

use crate::error::ApiError;

/// Run a calculation
///
/// The body is decoded by hand so that an absent or malformed body flows
/// through the pipeline's own first gate instead of the framework's
/// default rejection.
pub async fn calculate(body: Bytes) -> Result<Json<CalculationResult>, ApiError> {
    let body: Value = serde_json::from_slice(&body).map_err(|_| CalcError::BodyRequired)?;

    let request = CalculationRequest::from_json(&body)?;
    let result = request.evaluate()?;

    Ok(Json(result))
}

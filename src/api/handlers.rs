use axum::{extract::State, Json};
use std::sync::Arc;

use super::{HealthResponse, InfoResponse, PredictRequest, PredictResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::validate;

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    // Validate input
    let validated = validate::validate(&request).map_err(AppError::Validation)?;

    // Classify (placeholder; does not fetch the URL or inspect the message)
    let result = state.detector.classify(&validated);

    Ok(Json(PredictResponse {
        status: "success".to_string(),
        prediction: result.prediction,
        confidence: result.confidence,
        language: result.language,
        note: result.note,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "voice-detect-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        service: "voice-detect-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
        endpoints: vec![
            "POST /predict".to_string(),
            "GET /health".to_string(),
            "GET /".to_string(),
        ],
    })
}

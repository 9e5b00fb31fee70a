pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::detector::Prediction;

/// Raw wire shape of a prediction request. Fields are optional so that
/// missing keys are reported through our validation details instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub status: String,
    pub prediction: Prediction,
    pub confidence: f64,
    pub language: String,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<String>,
}

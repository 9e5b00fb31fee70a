use serde::Serialize;

use crate::validate::PredictionRequest;

/// Closed set of classification labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Prediction {
    #[serde(rename = "human-generated voice")]
    HumanVoice,
    #[serde(rename = "AI-generated voice")]
    AiGenerated,
}

#[derive(Debug, Clone)]
pub struct Classification {
    pub prediction: Prediction,
    pub confidence: f64,
    pub language: String,
    pub note: String,
}

const PLACEHOLDER_CONFIDENCE: f64 = 0.85;
const PLACEHOLDER_LANGUAGE: &str = "en";
const PLACEHOLDER_NOTE: &str =
    "Illustrative placeholder result; audio retrieval and model inference are not implemented";

/// Placeholder voice classifier. Returns a constant result for every
/// request: the audio URL is never fetched and the message is never
/// inspected beyond validation.
pub struct Detector;

impl Detector {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, _request: &PredictionRequest) -> Classification {
        Classification {
            prediction: Prediction::HumanVoice,
            confidence: PLACEHOLDER_CONFIDENCE,
            language: PLACEHOLDER_LANGUAGE.to_string(),
            note: PLACEHOLDER_NOTE.to_string(),
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

use serde::Serialize;
use url::Url;

use crate::api::PredictRequest;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A request that passed validation.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub message: String,
    pub audio_url: Url,
}

/// Validate a raw request, collecting every field failure rather than
/// stopping at the first.
pub fn validate(raw: &PredictRequest) -> Result<PredictionRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    let message = match raw.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => Some(m.to_string()),
        Some(_) => {
            errors.push(FieldError::new("message", "message cannot be empty"));
            None
        }
        None => {
            errors.push(FieldError::new("message", "message is required"));
            None
        }
    };

    let audio_url = match raw.audio_url.as_deref().map(str::trim) {
        Some(u) if !u.is_empty() => match check_audio_url(u) {
            Ok(url) => Some(url),
            Err(e) => {
                errors.push(e);
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new("audio_url", "audio_url cannot be empty"));
            None
        }
        None => {
            errors.push(FieldError::new("audio_url", "audio_url is required"));
            None
        }
    };

    match (message, audio_url) {
        (Some(message), Some(audio_url)) => Ok(PredictionRequest { message, audio_url }),
        _ => Err(errors),
    }
}

/// Parse the URL and check the scheme. Non-network schemes (file, ftp, data)
/// and scheme-less strings are rejected.
fn check_audio_url(raw: &str) -> Result<Url, FieldError> {
    let url = Url::parse(raw).map_err(|e| {
        FieldError::new("audio_url", format!("audio_url is not a valid URL: {}", e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FieldError::new(
            "audio_url",
            format!("audio_url scheme must be http or https, got '{}'", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(message: Option<&str>, audio_url: Option<&str>) -> PredictRequest {
        PredictRequest {
            message: message.map(String::from),
            audio_url: audio_url.map(String::from),
        }
    }

    #[test]
    fn accepts_valid_request() {
        let result = validate(&raw(
            Some("Please analyze this voice sample"),
            Some("https://example.com/sample.mp3"),
        ))
        .unwrap();
        assert_eq!(result.message, "Please analyze this voice sample");
        assert_eq!(result.audio_url.scheme(), "https");
        assert_eq!(result.audio_url.host_str(), Some("example.com"));
    }

    #[test]
    fn accepts_http_scheme() {
        let result = validate(&raw(Some("hi"), Some("http://example.com/a.wav")));
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_missing_message() {
        let errors = validate(&raw(None, Some("https://example.com/a.mp3"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn rejects_empty_message() {
        let errors = validate(&raw(Some(""), Some("https://example.com/a.mp3"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn rejects_whitespace_message() {
        let errors = validate(&raw(Some("   "), Some("https://example.com/a.mp3"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn rejects_missing_audio_url() {
        let errors = validate(&raw(Some("hi"), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "audio_url");
    }

    #[test]
    fn rejects_empty_audio_url() {
        let errors = validate(&raw(Some("hi"), Some(""))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "audio_url");
    }

    #[test]
    fn rejects_ftp_scheme() {
        let errors = validate(&raw(Some("hi"), Some("ftp://example.com/a.mp3"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "audio_url");
        assert!(errors[0].message.contains("scheme"));
    }

    #[test]
    fn rejects_file_scheme() {
        let errors = validate(&raw(Some("hi"), Some("file:///tmp/a.wav"))).unwrap_err();
        assert_eq!(errors[0].field, "audio_url");
        assert!(errors[0].message.contains("scheme"));
    }

    #[test]
    fn rejects_scheme_less_url() {
        let errors = validate(&raw(Some("hi"), Some("example.com/a.mp3"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "audio_url");
    }

    #[test]
    fn rejects_garbage_url() {
        let errors = validate(&raw(Some("hi"), Some("not a url at all"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "audio_url");
    }

    #[test]
    fn collects_all_failures() {
        let errors = validate(&raw(Some(""), Some("ftp://x"))).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "message");
        assert_eq!(errors[1].field, "audio_url");
    }

    #[test]
    fn trims_message() {
        let result = validate(&raw(Some("  hello  "), Some("https://example.com/a.mp3"))).unwrap();
        assert_eq!(result.message, "hello");
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The keyword-ideas lookup failed; there is nothing to rank.
    #[error("Keyword ideas lookup failed: {0}")]
    KeywordIdeas(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::KeywordIdeas(msg) => {
                tracing::error!("Keyword ideas lookup failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "KEYWORD_IDEAS_UNAVAILABLE",
                    "Keyword data could not be retrieved; no opportunities can be ranked"
                        .to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "Business profile extraction failed".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_ideas_maps_to_bad_gateway() {
        let (status, code, _) = AppError::KeywordIdeas("timeout".to_string()).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "KEYWORD_IDEAS_UNAVAILABLE");
    }

    #[test]
    fn test_validation_keeps_message() {
        let (status, code, message) = AppError::Validation("bad domain".to_string()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(message, "bad domain");
    }

    #[test]
    fn test_llm_error_hides_details() {
        let (status, code, message) = AppError::Llm("invalid x-api-key sk-123".to_string()).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "LLM_ERROR");
        assert!(!message.contains("sk-123"));
    }
}

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::gemini::GeminiError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest {
        message: String,
        details: Option<String>,
    },

    #[error("Unauthorized: Invalid API Key")]
    Unauthorized,

    /// Anything that went wrong talking to the model or reading its answer.
    #[error("AI processing failed: {0}")]
    Processing(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::BadRequest { message, details } => ErrorBody {
                error: message.clone(),
                details: details.clone(),
            },
            ApiError::Unauthorized => ErrorBody {
                error: self.to_string(),
                details: None,
            },
            ApiError::Processing(details) => ErrorBody {
                error: "AI processing failed".to_string(),
                details: Some(details.clone()),
            },
        }
    }
}

impl From<GeminiError> for ApiError {
    fn from(err: GeminiError) -> Self {
        ApiError::Processing(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: ApiError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_bad_request_body_has_no_details() {
        let err = ApiError::bad_request("Missing prompt or image");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = body_json(err).await;
        assert_eq!(body["error"], "Missing prompt or image");
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_unauthorized_body() {
        let err = ApiError::Unauthorized;
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let body = body_json(err).await;
        assert_eq!(body["error"], "Unauthorized: Invalid API Key");
    }

    #[actix_web::test]
    async fn test_processing_error_carries_details() {
        let err = ApiError::Processing("No candidates returned".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(err).await;
        assert_eq!(body["error"], "AI processing failed");
        assert_eq!(body["details"], "No candidates returned");
    }
}

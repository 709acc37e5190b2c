//! Error handling for the Jal-Mitra advisory service
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::DatasetError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Session not found: {0}")]
    SessionNotFound(uuid::Uuid),

    // External service errors
    #[error("Generative provider error: {0}")]
    GenerativeProvider(String),

    #[error("Generative provider not configured")]
    GenerativeProviderDisabled,

    // Start-up errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::GenerativeProvider(_) => StatusCode::BAD_GATEWAY,
            AppError::GenerativeProviderDisabled => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Configuration(_) | AppError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Validation {
                field,
                message,
                message_hi,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_hi: message_hi.clone(),
                field: Some(field.clone()),
            },
            AppError::ValidationError(msg) => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: msg.clone(),
                message_hi: format!("अमान्य डेटा: {}", msg),
                field: None,
            },
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_hi: format!("{} नहीं मिला", resource),
                field: None,
            },
            AppError::SessionNotFound(id) => ErrorDetail {
                code: "SESSION_NOT_FOUND".to_string(),
                message_en: format!("Session {} not found or already ended", id),
                message_hi: format!("सत्र {} नहीं मिला या समाप्त हो चुका है", id),
                field: None,
            },
            AppError::GenerativeProvider(msg) => ErrorDetail {
                code: "GENERATIVE_PROVIDER_ERROR".to_string(),
                message_en: format!("Generative provider error: {}", msg),
                message_hi: format!("जनरेटिव सेवा में त्रुटि: {}", msg),
                field: None,
            },
            AppError::GenerativeProviderDisabled => ErrorDetail {
                code: "GENERATIVE_PROVIDER_DISABLED".to_string(),
                message_en: "The generative assistant is not configured".to_string(),
                message_hi: "जनरेटिव सहायक कॉन्फ़िगर नहीं है".to_string(),
                field: None,
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_en: format!("Configuration error: {}", msg),
                message_hi: format!("कॉन्फ़िगरेशन त्रुटि: {}", msg),
                field: None,
            },
            AppError::Dataset(err) => ErrorDetail {
                code: "DATASET_ERROR".to_string(),
                message_en: err.to_string(),
                message_hi: "भूजल डेटा तालिका अमान्य है".to_string(),
                field: None,
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        match field_errors.iter().next() {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                AppError::Validation {
                    field: field.to_string(),
                    message_hi: format!("{} के लिए अमान्य मान", field),
                    message,
                }
            }
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_detail = self.detail();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generative_failure_is_bad_gateway() {
        let err = AppError::GenerativeProvider("timeout".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_session_not_found_is_404() {
        let err = AppError::SessionNotFound(uuid::Uuid::new_v4());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail().code, "SESSION_NOT_FOUND");
    }

    #[test]
    fn test_start_up_errors_are_server_errors() {
        let err = AppError::Configuration("missing dataset".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail().code, "CONFIGURATION_ERROR");

        let err = AppError::from(DatasetError::InvalidRow {
            row: 2,
            reason: "Latitude must be between -90 and 90 degrees",
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail().code, "DATASET_ERROR");
        assert!(err.detail().message_en.contains("row 2"));
    }

    #[test]
    fn test_validation_detail_carries_field() {
        let err = AppError::Validation {
            field: "text".to_string(),
            message: "Text cannot be empty".to_string(),
            message_hi: "पाठ खाली नहीं हो सकता".to_string(),
        };
        let detail = err.detail();
        assert_eq!(detail.field.as_deref(), Some("text"));
        assert_eq!(detail.code, "VALIDATION_ERROR");
    }
}

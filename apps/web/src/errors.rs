use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so JSON handlers can return `Result<T, AppError>`.
/// HTML handlers catch these and render a toast instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Flow '{0}' returned no output")]
    EmptyFlowOutput(&'static str),

    #[error("Advisory service unavailable")]
    AdvisoryUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) | AppError::EmptyFlowOutput(_) => StatusCode::BAD_GATEWAY,
            AppError::AdvisoryUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::EmptyFlowOutput(_) => "EMPTY_FLOW_OUTPUT",
            AppError::AdvisoryUnavailable => "ADVISORY_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to a visitor. Upstream and internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::Validation(_) => "Please correct the highlighted fields.".to_string(),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                "The advisory service could not produce a recommendation. Please try again."
                    .to_string()
            }
            AppError::EmptyFlowOutput(flow) => {
                tracing::error!("Flow {flow} returned no output");
                "The advisory service returned an empty answer. Please try again.".to_string()
            }
            AppError::AdvisoryUnavailable => {
                "The advisory service is not available right now.".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NotConfigured => AppError::AdvisoryUnavailable,
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut error = json!({
            "code": self.code(),
            "message": self.public_message(),
        });

        if let AppError::Validation(errors) = &self {
            error["fields"] = json!(field_messages(errors));
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Flattens validator output into `field -> [message]`, ordered by field name.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

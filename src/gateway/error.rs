use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::judge::JudgeError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized - Invalid API key")]
    Unauthorized,

    #[error("Missing required fields: prompt, baseline_answer, mre_answer")]
    MissingFields,

    /// Upstream answered with a non-success status; `details` is its raw body.
    #[error("OpenAI API error")]
    Upstream { details: String },

    #[error("Invalid scores from GPT (out of range 0-1)")]
    InvalidScores(#[source] ScoringError),

    #[error("Internal server error")]
    Internal { message: String },
}

impl GatewayError {
    pub fn internal(message: impl Into<String>) -> Self {
        GatewayError::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::MissingFields => StatusCode::BAD_REQUEST,
            GatewayError::Upstream { .. }
            | GatewayError::InvalidScores(_)
            | GatewayError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JudgeError> for GatewayError {
    fn from(err: JudgeError) -> Self {
        match err {
            JudgeError::Upstream { body, .. } => GatewayError::Upstream { details: body },
            other => GatewayError::internal(other.to_string()),
        }
    }
}

impl From<ScoringError> for GatewayError {
    fn from(err: ScoringError) -> Self {
        if err.is_invalid_scores() {
            GatewayError::InvalidScores(err)
        } else {
            GatewayError::internal(err.to_string())
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Evaluation failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let error = self.to_string();
        let (details, message) = match self {
            GatewayError::Upstream { details } => (Some(details), None),
            GatewayError::Internal { message } => (None, Some(message)),
            _ => (None, None),
        };

        let body = Json(ErrorResponse {
            error,
            details,
            message,
        });

        (status, body).into_response()
    }
}

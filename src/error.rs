use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::sports::Sport;

const SPORT_HINT: &str = "Use ?sport=football|rugby|tennis|basketball|icehockey|snooker";

/// Every way a predictions request can end without a 200.
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Missing required query parameter: sport")]
    MissingSport,

    #[error("Unsupported sport: '{0}'")]
    UnsupportedSport(String),

    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error("{var} is not configured on the server")]
    MissingApiKey { var: &'static str },

    /// Upstream answered, but not with a 2xx
    #[error("Upstream fetch to {provider} failed")]
    Upstream {
        provider: String,
        status: u16,
        status_text: String,
        body: String,
    },

    /// Transport failure, timeout or malformed upstream JSON
    #[error("Failed to fetch predictions from {provider}")]
    Unexpected {
        provider: String,
        cause: anyhow::Error,
    },
}

impl PredictionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictionError::MissingSport
            | PredictionError::UnsupportedSport(_)
            | PredictionError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            PredictionError::MissingApiKey { .. } | PredictionError::Unexpected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PredictionError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = match &self {
            PredictionError::MissingSport => json!({
                "error": message,
                "hint": SPORT_HINT,
                "supported": Sport::names(),
            }),
            PredictionError::UnsupportedSport(_) => json!({
                "error": message,
                "supported": Sport::names(),
            }),
            PredictionError::InvalidDate(_) => json!({
                "error": message,
                "hint": "Use YYYY-MM-DD",
            }),
            PredictionError::MissingApiKey { .. } => json!({ "error": message }),
            PredictionError::Upstream {
                status,
                status_text,
                body,
                ..
            } => json!({
                "error": message,
                "status": status,
                "statusText": status_text,
                "upstreamBody": body,
            }),
            PredictionError::Unexpected { provider, cause } => {
                error!("Error in /api/predictions-by-sport ({}): {:#}", provider, cause);
                json!({ "error": message })
            }
        };
        (status, Json(body)).into_response()
    }
}

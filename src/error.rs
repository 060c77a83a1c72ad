use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::{GeocodingError, RoutingError};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-supplied input failed a required-field or non-empty check.
    #[error("{0}")]
    InvalidRequest(String),

    /// An upstream provider failed. `detail` carries the provider's own
    /// error payload when it responded with one.
    #[error("{message}")]
    Upstream {
        message: String,
        detail: Option<serde_json::Value>,
    },

    /// The outbound call exceeded the configured timeout.
    #[error("upstream provider timed out")]
    Timeout,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    detail: None,
                },
            ),
            Self::Upstream { message, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message,
                    detail,
                },
            ),
            Self::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorBody {
                    error: "Upstream provider timed out".to_string(),
                    detail: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<GeocodingError> for ApiError {
    fn from(err: GeocodingError) -> Self {
        match err {
            GeocodingError::Timeout => Self::Timeout,
            _ => Self::Upstream {
                message: "Failed to query search provider".to_string(),
                detail: None,
            },
        }
    }
}

impl From<RoutingError> for ApiError {
    fn from(err: RoutingError) -> Self {
        match err {
            RoutingError::Timeout => Self::Timeout,
            RoutingError::Provider(payload) => Self::Upstream {
                message: "Routing provider returned error".to_string(),
                detail: Some(payload),
            },
            _ => Self::Upstream {
                message: "Failed to query routing provider".to_string(),
                detail: None,
            },
        }
    }
}

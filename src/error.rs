use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// External service an adapter talks to. Used to build user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Weather,
    Traffic,
    Places,
    Images,
    Videos,
    Map,
}

impl Upstream {
    fn label(&self) -> &'static str {
        match self {
            Upstream::Weather => "날씨",
            Upstream::Traffic => "교통",
            Upstream::Places => "맛집/휴게소",
            Upstream::Images => "이미지",
            Upstream::Videos => "유튜브",
            Upstream::Map => "지도",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Weather => write!(f, "weather"),
            Upstream::Traffic => write!(f, "traffic"),
            Upstream::Places => write!(f, "places"),
            Upstream::Images => write!(f, "images"),
            Upstream::Videos => write!(f, "videos"),
            Upstream::Map => write!(f, "map"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Upstream rejected: {message}")]
    UpstreamRejected {
        message: String,
        detail: Option<String>,
    },

    #[error("Transport failure: {message}: {detail}")]
    Transport { message: String, detail: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// Non-success status from the upstream, with its body as detail.
    pub fn rejected(upstream: Upstream, detail: impl Into<String>) -> Self {
        AppError::UpstreamRejected {
            message: format!("{} API 호출 실패", upstream.label()),
            detail: Some(detail.into()),
        }
    }

    /// Upstream answered 2xx but without the data we need.
    pub fn empty_response(upstream: Upstream) -> Self {
        AppError::UpstreamRejected {
            message: format!("{} API 응답이 비어 있습니다.", upstream.label()),
            detail: None,
        }
    }

    /// Network or decode failure while talking to the upstream.
    pub fn transport(upstream: Upstream, err: impl fmt::Display) -> Self {
        AppError::Transport {
            message: format!("{} API 처리 중 오류", upstream.label()),
            detail: err.to_string(),
        }
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ConfigurationMissing(message) => {
                tracing::info!("Configuration missing: {}", message);
                (StatusCode::BAD_REQUEST, json!({ "message": message }))
            }
            AppError::UpstreamRejected { message, detail } => {
                tracing::warn!(detail = ?detail, "Upstream rejected: {}", message);
                let body = match detail {
                    Some(detail) => json!({ "message": message, "detail": detail }),
                    None => json!({ "message": message }),
                };
                (StatusCode::BAD_GATEWAY, body)
            }
            AppError::Transport { message, detail } => {
                tracing::error!("Transport failure: {}: {}", message, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": message, "detail": detail }),
                )
            }
            AppError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "message": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    #[error("no video found with ID {0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),

    #[error("failed to parse time: {0}")]
    Parse(String),

    #[error("error analyzing sentiment: {0}")]
    Classification(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(id) => {
                tracing::warn!("Video not found: {}", id);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Parse(msg) => {
                tracing::error!("Parse error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Classification(msg) => {
                tracing::error!("Classification error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 错误信息以纯文本返回
        (status, self.to_string()).into_response()
    }
}

// 便利函数，用于创建常见错误
impl AppError {
    pub fn missing_parameter(name: &'static str) -> Self {
        Self::MissingParameter(name)
    }

    pub fn not_found(video_id: &str) -> Self {
        Self::NotFound(video_id.to_string())
    }

    pub fn upstream(context: &str, detail: impl std::fmt::Display) -> Self {
        Self::Upstream(format!("{}: {}", context, detail))
    }
}

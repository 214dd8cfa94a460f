use crate::utils::error::SalesError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::any::Any;

/// Error returned by API handlers; renders as `{success: false, message, error}`.
#[derive(Debug)]
pub struct ApiError {
    message: &'static str,
    source: SalesError,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    error: String,
}

impl ApiError {
    pub fn new(message: &'static str, source: SalesError) -> Self {
        Self { message, source }
    }

    pub fn status(&self) -> StatusCode {
        if self.source.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 客戶端錯誤回傳詳細原因；內部錯誤只記錄在日誌中
        let error = if status.is_client_error() {
            tracing::warn!("{}: {}", self.message, self.source);
            self.source.user_friendly_message()
        } else {
            tracing::error!("❌ {}: {}", self.message, self.source);
            "internal server error".to_string()
        };

        let body = ErrorBody {
            success: false,
            message: self.message.to_string(),
            error,
        };
        (status, Json(body)).into_response()
    }
}

/// 將 handler panic 轉為 500 JSON 回應，伺服器持續運作
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::new(
        "Unexpected server error",
        SalesError::InternalError { message: detail },
    )
    .into_response()
}

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::services::places_client::types::error_info::ErrorInfo;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

/// Upstream failures reach the client as a bad gateway carrying the cleaned message.
impl From<ErrorInfo> for AppError {
    fn from(error: ErrorInfo) -> Self {
        AppError {
            code: StatusCode::BAD_GATEWAY,
            message: error.message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (self.code, Json(ErrorInfo { message: self.message })).into_response()
    }
}

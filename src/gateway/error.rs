use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::GRADER_STATUS_HEADER;
use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("embedding failed: {0}")]
    EmbeddingFailed(#[from] EmbeddingError),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    /// Status code and `x-grader-status` value for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            // Every schema failure is a 422, including syntax errors and a missing content type.
            GatewayError::InvalidRequest(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request")
            }
            GatewayError::EmbeddingFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "embedding_error")
            }
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, grader_status) = self.status();

        let mut headers = HeaderMap::new();
        headers.insert(
            GRADER_STATUS_HEADER,
            HeaderValue::from_static(grader_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}

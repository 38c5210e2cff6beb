use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// The two client-visible failure outcomes. Whatever actually went
/// wrong stays in the logs; clients only ever see one of these fixed
/// messages, so neither validation internals nor engine state leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Payload did not match the expected shape.
    InvalidInput,
    /// Anything that failed after validation.
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::InvalidInput => "Unexpected body",
            ApiError::Internal => "Something went wrong",
        };

        (StatusCode::BAD_REQUEST, Json(message)).into_response()
    }
}

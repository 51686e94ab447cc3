//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use neighbors_core::SnapshotError;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A snapshot the evaluator refused
#[derive(Debug)]
pub struct ApiError(pub SnapshotError);

impl From<SnapshotError> for ApiError {
    fn from(err: SnapshotError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected snapshot: {}", self.0);

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

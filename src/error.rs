//! Request-level error taxonomy.
//!
//! Two recoverable failure classes exist on the read path: a caller supplied an
//! out-of-domain parameter (`Validation`), or a referenced chapter/verse does not
//! exist (`NotFound`). Both serialize as `{"error": ...}` payloads. Corrupt corpus
//! data is not represented here; the loader treats it as fatal at startup.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or out-of-domain request parameter. Carries the client-facing message.
    #[error("{0}")]
    Validation(String),

    /// The referenced chapter, verse, or route does not exist.
    #[error("resource not found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

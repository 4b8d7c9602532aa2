use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::schemas::{BadPropertyBody, MessageBody};

/// Failure shapes of the HTTP contract.
///
/// Reads that miss a record answer 404 while writes that miss answer 400;
/// the split is part of the published contract and both variants exist so
/// the difference stays visible at the call site.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more required body fields are absent. Every missing field is
    /// reported, not just the first.
    #[error("bad property: missing {missing:?}")]
    BadProperty { missing: Vec<&'static str> },

    /// Lookup by id failed on a read route (404).
    #[error("not found")]
    NotFound,

    /// Lookup by id failed on a write route (400).
    #[error("not found")]
    WriteNotFound,

    /// The store rejected the operation. Details are logged at the call
    /// site; the wire only carries an opaque message.
    #[error("storage error")]
    Storage { status: StatusCode },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadProperty { missing } => (
                StatusCode::BAD_REQUEST,
                Json(BadPropertyBody {
                    message: "Bad property".to_string(),
                    missing: missing.into_iter().map(String::from).collect(),
                }),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: "Not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::WriteNotFound => (
                StatusCode::BAD_REQUEST,
                Json(MessageBody {
                    message: "Not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Storage { status } => (
                status,
                Json(MessageBody {
                    message: "Storage error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

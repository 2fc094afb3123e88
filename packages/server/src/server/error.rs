//! Error-to-HTTP mapping
//!
//! Every response body carries the stable machine-readable kind plus a
//! human-readable message; illegal transitions additionally carry the
//! attempted pair so the caller can explain why.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::Error;

/// Wrapper making the domain error taxonomy an axum response.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match &err {
            Error::Auth(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::IllegalTransition { .. }
            | Error::DuplicateApplication
            | Error::WithdrawalClosed { .. }
            | Error::Conflict => StatusCode::CONFLICT,
            Error::JobUnavailable => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = json!({
            "kind": err.kind(),
            "message": err.to_string(),
        });

        match &err {
            Error::IllegalTransition { from, to } => {
                body["from"] = json!(from.to_string());
                body["to"] = json!(to.to_string());
            }
            Error::WithdrawalClosed { status: s } => {
                body["status"] = json!(s.to_string());
            }
            Error::Database(db_err) => {
                // Infrastructure failure: log the detail, never leak it.
                tracing::error!(error = %db_err, "Database error");
                body["message"] = json!("Internal server error");
            }
            _ => {}
        }

        (status, Json(json!({ "error": body }))).into_response()
    }
}

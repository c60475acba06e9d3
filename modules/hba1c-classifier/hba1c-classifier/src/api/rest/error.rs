use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hba1c_classifier_sdk::ClassifierError;
use serde::Serialize;

/// `error` value of every 500 response.
pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";

/// JSON error body: `{"error": ...}` plus `message` for internal errors.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// REST-facing wrapper so `?` on `ClassifierError` works in handlers.
#[derive(Debug)]
pub struct ApiError(pub ClassifierError);

impl From<ClassifierError> for ApiError {
    fn from(e: ClassifierError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0.to_string();
        if !self.0.is_validation() {
            return internal_error_response(&error);
        }

        tracing::debug!(%error, "rejected hba1c request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: &error,
                message: None,
            }),
        )
            .into_response()
    }
}

/// 500 response carrying the failure text; logs the failure at `error`.
#[must_use]
pub fn internal_error_response(message: &str) -> Response {
    tracing::error!(error = %message, "Unhandled error in hba1c classifier");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: INTERNAL_SERVER_ERROR,
            message: Some(message),
        }),
    )
        .into_response()
}

/// Turn a caught handler panic into the 500 JSON response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
#[allow(clippy::needless_pass_by_value)] // signature required by CatchPanicLayer
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    internal_error_response(message)
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use condmon_core::error::CoreError;
use condmon_store::StoreError;
use serde_json::json;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Everything a handler can fail with.
///
/// Rendered as `{ "error": <message>, "code": <CODE> }`. Store and internal
/// failures are logged and answered with a generic message so file paths and
/// OS errors never reach the browser.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The reading file could not be read or written.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An extended-only surface requested while running in basic mode.
    #[error("{0} is not available in basic reporting mode")]
    FeatureDisabled(&'static str),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) | AppError::FeatureDisabled(_) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            AppError::Core(CoreError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Core(CoreError::Internal(_))
            | AppError::Store(_)
            | AppError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::Validation(msg)) | AppError::BadRequest(msg) => msg.clone(),
            AppError::FeatureDisabled(_) => self.to_string(),
            AppError::Core(CoreError::Internal(_))
            | AppError::Store(_)
            | AppError::InternalError(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let body = json!({
            "error": self.public_message(),
            "code": code,
        });
        (status, Json(body)).into_response()
    }
}

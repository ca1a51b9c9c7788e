use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kotsadm_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `kotsadm_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::ConfigurationMissing { field }) => {
                tracing::error!(field, "Preflight endpoint not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_MISSING",
                    format!("{field} is not configured"),
                )
            }
            AppError::Core(CoreError::StoreUnavailable(err)) => {
                tracing::error!(error = %err, "Preflight store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "The deployment store is unavailable".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inktrack_core::error::InktrackError;

// ---------------------------------------------------------------------------
// Internal sentinel for explicit 401 Unauthorized errors
// ---------------------------------------------------------------------------

/// Private sentinel error type used to carry an explicit HTTP 401 through
/// the `anyhow::Error` chain without touching the `InktrackError` enum.
#[derive(Debug)]
struct UnauthorizedError(String);

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnauthorizedError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 401 Unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self(UnauthorizedError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(u) = self.0.downcast_ref::<UnauthorizedError>() {
            let body = serde_json::json!({ "error": u.0.clone() });
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<InktrackError>() {
            match e {
                InktrackError::CommissionNotFound(_) => StatusCode::NOT_FOUND,
                InktrackError::CommissionExists(_) => StatusCode::CONFLICT,
                InktrackError::InvalidId(_)
                | InktrackError::InvalidStatus(_)
                | InktrackError::InvalidCategory(_)
                | InktrackError::InvalidBackend(_)
                | InktrackError::UnknownStatusLabel(_)
                | InktrackError::MissingField(_)
                | InktrackError::NegativePrice(_)
                | InktrackError::TooManyAttachments { .. }
                | InktrackError::ImageDecode(_) => StatusCode::BAD_REQUEST,
                InktrackError::CapacityExceeded { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                InktrackError::Store(_)
                | InktrackError::Io(_)
                | InktrackError::Yaml(_)
                | InktrackError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;
use inktrack_core::credential;

#[derive(serde::Deserialize)]
pub struct LoginBody {
    pub passphrase: String,
}

/// POST /api/session — credential check. Success mints a session token and
/// sets the auth cookie; failure is 401 and the submitted passphrase is
/// dropped on the floor (never stored, never logged).
pub async fn login(
    State(app): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Response, AppError> {
    if !credential::verify(&body.passphrase, &app.config.password_sha256) {
        tracing::warn!("owner login rejected");
        return Err(AppError::unauthorized("invalid passphrase"));
    }

    let token = app.auth.write().await.issue();
    let payload = serde_json::json!({ "identity": app.config.owner });

    Ok((
        StatusCode::OK,
        [("Set-Cookie", auth::session_cookie(&token))],
        Json(payload),
    )
        .into_response())
}

/// DELETE /api/session — logout. Clears the token and expires the cookie.
pub async fn logout(State(app): State<AppState>) -> Response {
    app.auth.write().await.clear();
    (
        StatusCode::OK,
        [("Set-Cookie", auth::clear_cookie())],
        Json(serde_json::json!({ "logged_out": true })),
    )
        .into_response()
}

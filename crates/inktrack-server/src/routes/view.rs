use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;
use inktrack_core::session::Session;
use inktrack_core::types::{Role, StatusFilter};
use inktrack_core::view::{self, ViewQuery, ViewState};

#[derive(serde::Deserialize)]
pub struct ViewParams {
    #[serde(default)]
    pub search: String,
    /// "all" or one of the four status labels.
    pub status: Option<String>,
    /// View-mode toggle: "client" (default) or "owner".
    pub mode: Option<String>,
}

/// GET /api/view — run the view-state derivation for the caller's session.
///
/// The mode parameter is the role toggle; authentication is taken from the
/// session cookie. An owner-mode request without a valid session yields the
/// `login_required` gate rather than an error.
pub async fn get_view(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ViewParams>,
) -> Result<Json<ViewState>, AppError> {
    let role = match params.mode.as_deref() {
        Some("owner") => Role::Owner,
        _ => Role::Client,
    };

    let authenticated = auth::is_authenticated(&app, &headers).await;
    let session = match role {
        Role::Owner if authenticated => Session::owner(app.config.owner.clone()),
        Role::Owner => Session {
            role: Role::Owner,
            identity: None,
        },
        Role::Client => Session::client(),
    };

    let status: StatusFilter = match params.status.as_deref() {
        None => StatusFilter::All,
        Some(s) => s.parse()?,
    };

    let cache = app.cache.read().await;
    let state = view::derive(
        cache.items(),
        &session,
        &ViewQuery {
            search: &params.search,
            status,
        },
    );
    Ok(Json(state))
}

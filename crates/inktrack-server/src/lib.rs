pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> anyhow::Result<Router> {
    let app_state = state::AppState::new(root)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        // Session
        .route(
            "/api/session",
            post(routes::session::login).delete(routes::session::logout),
        )
        // Derived dashboard view
        .route("/api/view", get(routes::view::get_view))
        // Commissions
        .route(
            "/api/commissions",
            post(routes::commissions::create_commission),
        )
        .route(
            "/api/commissions/{id}",
            get(routes::commissions::get_commission)
                .delete(routes::commissions::delete_commission),
        )
        .route(
            "/api/commissions/{id}/advance",
            post(routes::commissions::advance_commission),
        )
        .route(
            "/api/commissions/{id}/revert",
            post(routes::commissions::revert_commission),
        )
        .route(
            "/api/commissions/{id}/status",
            put(routes::commissions::set_commission_status),
        )
        // One-way local → cloud migration
        .route("/api/sync", post(routes::sync::sync_local))
        // Assistant
        .route(
            "/api/commissions/{id}/assistant/update",
            post(routes::assistant::draft_client_update),
        )
        .route(
            "/api/commissions/{id}/assistant/plan",
            post(routes::assistant::suggest_work_plan),
        )
        .layer(cors)
        .with_state(app_state);

    Ok(router)
}

/// Start the inktrack API server.
pub async fn serve(root: PathBuf, port: u16) -> anyhow::Result<()> {
    let app = build_router(root)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("inktrack server listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the server on a pre-bound listener so the caller can read the
/// actual port first (useful when `port = 0` and the OS picks one).
pub async fn serve_on(root: PathBuf, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root)?;

    tracing::info!("inktrack server listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;
use inktrack_core::config::Backend;
use inktrack_core::docstore::DocStore;
use inktrack_core::paths;
use inktrack_core::repo::{self, CommissionRepository as _};
use inktrack_core::store::LocalStore;

/// POST /api/sync — one-way migration of the local blob into the document
/// store. Returns the uploaded count and refreshes the cache from the
/// active repository afterwards.
pub async fn sync_local(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    auth::require_owner(&app, &headers).await?;

    let root = app.root.clone();
    let capacity = app.config.local_capacity_bytes;
    let backend = app.config.backend;
    let active = app.repo.clone();
    let count = tokio::task::spawn_blocking(move || {
        let local = LocalStore::open(&root, capacity);
        match backend {
            // The active repository already is the document store; redb holds
            // an exclusive file lock, so upload through the open handle.
            Backend::Doc => repo::sync_local_to_cloud(&local, active.as_ref()),
            Backend::Local => {
                let cloud = DocStore::open(&paths::doc_store_path(&root))?;
                repo::sync_local_to_cloud(&local, &cloud)
            }
        }
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(count, "local commissions uploaded to document store");

    // Load round-trip so the view reflects the store after migration.
    let repo = app.repo.clone();
    let fresh = tokio::task::spawn_blocking(move || repo.list())
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    app.cache.write().await.replace_all(fresh);

    Ok(Json(serde_json::json!({ "uploaded": count })))
}

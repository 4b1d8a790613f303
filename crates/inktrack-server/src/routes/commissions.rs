use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;
use inktrack_core::commission::{self, Commission, CommissionDraft};
use inktrack_core::repo::CommissionRepository as _;
use inktrack_core::types::Status;

/// GET /api/commissions/:id — public fetch by exact id. Clients who know an
/// id may check their record directly.
pub async fn get_commission(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Commission>, AppError> {
    let cache = app.cache.read().await;
    let found = commission::find(cache.items(), &id)
        .cloned()
        .ok_or(inktrack_core::InktrackError::CommissionNotFound(id))?;
    Ok(Json(found))
}

/// POST /api/commissions — owner-only create. Stamps id, dates, and the
/// authenticated owner, then reloads the cache from the store.
pub async fn create_commission(
    State(app): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<CommissionDraft>,
) -> Result<Json<Commission>, AppError> {
    let identity = auth::require_owner(&app, &headers).await?;

    let fresh = Commission::create(identity, draft)?;
    let repo = app.repo.clone();
    let to_store = fresh.clone();
    let created = tokio::task::spawn_blocking(move || {
        repo.create(to_store)?;
        repo.list()
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    app.cache.write().await.replace_all(created);
    Ok(Json(fresh))
}

/// POST /api/commissions/:id/advance — step the lifecycle forward.
/// Applied optimistically; rolled back if the store rejects it.
pub async fn advance_commission(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth::require_owner(&app, &headers).await?;

    let mut cache = app.cache.write().await;
    let before = commission::find(cache.items(), &id).map(|c| c.status);
    let snapshot = cache.snapshot();
    let status = cache.apply_advance(&id)?;
    if Some(status) == before {
        // Already at the end of the lifecycle; nothing to write.
        return Ok(Json(serde_json::json!({ "id": id, "status": status })));
    }

    let repo = app.repo.clone();
    let remote_id = id.clone();
    let remote = tokio::task::spawn_blocking(move || repo.update_status(&remote_id, status))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    cache.settle(snapshot, remote)?;

    Ok(Json(serde_json::json!({ "id": id, "status": status })))
}

/// POST /api/commissions/:id/revert — step the lifecycle back.
pub async fn revert_commission(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth::require_owner(&app, &headers).await?;

    let mut cache = app.cache.write().await;
    let before = commission::find(cache.items(), &id).map(|c| c.status);
    let snapshot = cache.snapshot();
    let status = cache.apply_revert(&id)?;
    if Some(status) == before {
        return Ok(Json(serde_json::json!({ "id": id, "status": status })));
    }

    let repo = app.repo.clone();
    let remote_id = id.clone();
    let remote = tokio::task::spawn_blocking(move || repo.update_status(&remote_id, status))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    cache.settle(snapshot, remote)?;

    Ok(Json(serde_json::json!({ "id": id, "status": status })))
}

#[derive(serde::Deserialize)]
pub struct SetStatusBody {
    pub status: String,
}

/// PUT /api/commissions/:id/status — direct jump via the status selector.
pub async fn set_commission_status(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<SetStatusBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth::require_owner(&app, &headers).await?;
    let target: Status = body.status.parse()?;

    let mut cache = app.cache.write().await;
    let snapshot = cache.snapshot();
    cache.apply_status(&id, target)?;

    let repo = app.repo.clone();
    let remote_id = id.clone();
    let remote = tokio::task::spawn_blocking(move || repo.update_status(&remote_id, target))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    cache.settle(snapshot, remote)?;

    Ok(Json(serde_json::json!({ "id": id, "status": target })))
}

/// DELETE /api/commissions/:id — irreversible delete, applied optimistically.
pub async fn delete_commission(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth::require_owner(&app, &headers).await?;

    let mut cache = app.cache.write().await;
    let snapshot = cache.snapshot();
    cache.remove(&id)?;

    let repo = app.repo.clone();
    let remote_id = id.clone();
    let remote = tokio::task::spawn_blocking(move || repo.delete(&remote_id))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    cache.settle(snapshot, remote)?;

    Ok(Json(serde_json::json!({ "id": id, "deleted": true })))
}

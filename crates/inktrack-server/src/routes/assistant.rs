use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;
use gemini_client::{CommissionBrief, GeminiClient, GeminiError};
use inktrack_core::commission::{self, Commission};

/// Shown when no API key is configured.
pub const NO_KEY_NOTICE: &str = "Assistant unavailable: no API key configured.";
/// Shown when the generation call fails for any other reason.
pub const FAILURE_NOTICE: &str = "Could not generate a reply. Please try again later.";

enum Draft {
    ClientUpdate,
    WorkPlan,
}

/// POST /api/commissions/:id/assistant/update — draft a client-facing
/// progress message.
pub async fn draft_client_update(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    generate(app, headers, id, Draft::ClientUpdate).await
}

/// POST /api/commissions/:id/assistant/plan — suggest next working steps.
pub async fn suggest_work_plan(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    generate(app, headers, id, Draft::WorkPlan).await
}

/// Assistant failures never reach the caller as errors: the response is
/// always 200 with either the generated text or a static notice.
async fn generate(
    app: AppState,
    headers: HeaderMap,
    id: String,
    kind: Draft,
) -> Result<Json<serde_json::Value>, AppError> {
    auth::require_owner(&app, &headers).await?;

    let found: Commission = {
        let cache = app.cache.read().await;
        commission::find(cache.items(), &id)
            .cloned()
            .ok_or(inktrack_core::InktrackError::CommissionNotFound(id))?
    };

    let brief = CommissionBrief {
        client_name: found.client_name.clone(),
        title: found.title.clone(),
        status: found.status.to_string(),
        category: found.category.to_string(),
        description: found.description.clone(),
    };
    let prompt = match kind {
        Draft::ClientUpdate => gemini_client::prompt::client_update(&brief),
        Draft::WorkPlan => gemini_client::prompt::work_plan(&brief),
    };

    let assistant = &app.config.assistant;
    let text = match GeminiClient::from_env(&assistant.api_key_env, &assistant.model) {
        Err(GeminiError::MissingApiKey(var)) => {
            tracing::warn!(var, "assistant call skipped: no API key");
            NO_KEY_NOTICE.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "assistant client setup failed");
            FAILURE_NOTICE.to_string()
        }
        Ok(client) => match client.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "assistant generation failed");
                FAILURE_NOTICE.to_string()
            }
        },
    };

    Ok(Json(serde_json::json!({ "id": found.id, "text": text })))
}

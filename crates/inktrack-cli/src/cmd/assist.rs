use crate::cmd::open_repo;
use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use gemini_client::{CommissionBrief, GeminiClient, GeminiError};
use inktrack_core::commission;
use inktrack_core::config::Config;
use inktrack_core::repo::CommissionRepository as _;
use inktrack_server::routes::assistant::{FAILURE_NOTICE, NO_KEY_NOTICE};
use std::path::Path;

#[derive(Subcommand)]
pub enum AssistSubcommand {
    /// Draft a client-facing progress update
    Update { id: String },
    /// Suggest the next working steps
    Plan { id: String },
}

pub fn run(root: &Path, subcmd: AssistSubcommand, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;
    let commissions = repo.list().context("failed to list commissions")?;

    let (id, is_update) = match &subcmd {
        AssistSubcommand::Update { id } => (id.clone(), true),
        AssistSubcommand::Plan { id } => (id.clone(), false),
    };

    let c = commission::find(&commissions, &id)
        .with_context(|| format!("commission '{id}' not found"))?;
    let brief = CommissionBrief {
        client_name: c.client_name.clone(),
        title: c.title.clone(),
        status: c.status.to_string(),
        category: c.category.to_string(),
        description: c.description.clone(),
    };
    let prompt = if is_update {
        gemini_client::prompt::client_update(&brief)
    } else {
        gemini_client::prompt::work_plan(&brief)
    };

    // Assistant failures degrade to a static notice rather than an error.
    let text = match GeminiClient::from_env(&config.assistant.api_key_env, &config.assistant.model)
    {
        Err(GeminiError::MissingApiKey(_)) => NO_KEY_NOTICE.to_string(),
        Err(_) => FAILURE_NOTICE.to_string(),
        Ok(client) => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            match runtime.block_on(client.generate(&prompt)) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(error = %e, "assistant generation failed");
                    FAILURE_NOTICE.to_string()
                }
            }
        }
    };

    if json {
        print_json(&serde_json::json!({ "id": id, "text": text }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

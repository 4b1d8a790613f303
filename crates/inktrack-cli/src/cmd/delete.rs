use crate::cmd::open_repo;
use crate::output::print_json;
use anyhow::Context;
use inktrack_core::config::Config;
use inktrack_core::repo::CommissionRepository as _;
use std::path::Path;

pub fn run(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;

    repo.delete(id)
        .with_context(|| format!("commission '{id}' not found"))?;

    if json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("Deleted commission [{id}]");
    }
    Ok(())
}

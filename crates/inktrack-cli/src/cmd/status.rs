use crate::cmd::open_repo;
use crate::output::print_json;
use anyhow::Context;
use inktrack_core::commission;
use inktrack_core::config::Config;
use inktrack_core::repo::CommissionRepository as _;
use inktrack_core::types::Status;
use std::path::Path;

pub fn advance(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    step(root, id, json, Status::advance, "Advanced")
}

pub fn revert(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    step(root, id, json, Status::revert, "Reverted")
}

fn step(
    root: &Path,
    id: &str,
    json: bool,
    next: fn(Status) -> Status,
    verb: &str,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;
    let commissions = repo.list().context("failed to list commissions")?;
    let current = commission::find(&commissions, id)
        .with_context(|| format!("commission '{id}' not found"))?
        .status;

    let target = next(current);
    if target == current {
        // Boundary no-op; nothing is written.
        if json {
            print_json(&serde_json::json!({ "id": id, "status": target }))?;
        } else {
            println!("Commission [{id}] already at {current}, nothing to do");
        }
        return Ok(());
    }

    repo.update_status(id, target)
        .context("failed to update status")?;

    if json {
        print_json(&serde_json::json!({ "id": id, "status": target }))?;
    } else {
        println!("{verb} [{id}]: {current} -> {target}");
    }
    Ok(())
}

pub fn set(root: &Path, id: &str, status: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;
    let target: Status = status.parse().context("unrecognized status")?;

    repo.update_status(id, target)
        .with_context(|| format!("commission '{id}' not found"))?;

    if json {
        print_json(&serde_json::json!({ "id": id, "status": target }))?;
    } else {
        println!("Set [{id}] to {target}");
    }
    Ok(())
}

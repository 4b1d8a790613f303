use crate::cmd::open_repo;
use crate::output::{print_json, print_table};
use anyhow::Context;
use inktrack_core::commission;
use inktrack_core::config::Config;
use inktrack_core::repo::CommissionRepository as _;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;
    let commissions = repo.list().context("failed to list commissions")?;

    if json {
        print_json(&commissions)?;
        return Ok(());
    }

    if commissions.is_empty() {
        println!("No commissions yet. Add one with 'inktrack add'.");
        return Ok(());
    }

    println!("{}", commission::summarize(&commissions));
    println!();

    let rows: Vec<Vec<String>> = commissions
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.status.to_string(),
                c.client_name.clone(),
                c.title.clone(),
                format!("{:.0}", c.price),
                c.last_updated.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "STATUS", "CLIENT", "TITLE", "PRICE", "UPDATED"], rows);
    Ok(())
}

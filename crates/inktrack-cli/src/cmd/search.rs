use crate::cmd::open_repo;
use crate::output::{print_json, print_table};
use anyhow::Context;
use inktrack_core::config::Config;
use inktrack_core::repo::CommissionRepository as _;
use inktrack_core::session::Session;
use inktrack_core::types::StatusFilter;
use inktrack_core::view::{self, ListGate, ViewQuery};
use std::path::Path;

/// Client-side view of the dashboard: anonymous role, search required.
pub fn run(root: &Path, text: &str, status: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;
    let commissions = repo.list().context("failed to list commissions")?;

    let filter: StatusFilter = match status {
        None => StatusFilter::All,
        Some(s) => s.parse().context("unrecognized status filter")?,
    };

    let state = view::derive(
        &commissions,
        &Session::client(),
        &ViewQuery {
            search: text,
            status: filter,
        },
    );

    if json {
        print_json(&state)?;
        return Ok(());
    }

    match state.gate {
        ListGate::AwaitingQuery => {
            println!("Enter a client name or commission id to search.");
            return Ok(());
        }
        ListGate::LoginRequired => unreachable!("client sessions never hit the login gate"),
        ListGate::Visible => {}
    }

    if state.visible.is_empty() {
        println!("No commissions matching '{text}'.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = state
        .visible
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.status.to_string(),
                c.client_name.clone(),
                c.title.clone(),
                c.last_updated.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "STATUS", "CLIENT", "TITLE", "UPDATED"], rows);
    Ok(())
}

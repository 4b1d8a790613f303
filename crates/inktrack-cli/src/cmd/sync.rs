use crate::output::print_json;
use anyhow::Context;
use inktrack_core::config::Config;
use inktrack_core::docstore::DocStore;
use inktrack_core::paths;
use inktrack_core::repo;
use inktrack_core::store::LocalStore;
use std::path::Path;

/// One-way upload of the local blob into the document store.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let local = LocalStore::open(root, config.local_capacity_bytes);
    let cloud = DocStore::open(&paths::doc_store_path(root))
        .context("failed to open document store")?;

    let count = repo::sync_local_to_cloud(&local, &cloud).context("sync failed")?;

    if json {
        print_json(&serde_json::json!({ "uploaded": count }))?;
    } else if count == 0 {
        println!("Local store is empty, nothing to upload.");
    } else {
        println!("Uploaded {count} commissions to the document store.");
    }
    Ok(())
}

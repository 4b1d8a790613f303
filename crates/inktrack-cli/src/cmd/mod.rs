pub mod add;
pub mod assist;
pub mod delete;
pub mod hash;
pub mod init;
pub mod list;
pub mod search;
pub mod serve;
pub mod show;
pub mod status;
pub mod sync;

use anyhow::Context;
use inktrack_core::config::{Backend, Config};
use inktrack_core::docstore::DocStore;
use inktrack_core::paths;
use inktrack_core::repo::CommissionRepository;
use inktrack_core::store::LocalStore;
use std::path::Path;

/// Open the repository the config points at.
pub fn open_repo(root: &Path, config: &Config) -> anyhow::Result<Box<dyn CommissionRepository>> {
    Ok(match config.backend {
        Backend::Local => Box::new(LocalStore::open(root, config.local_capacity_bytes)),
        Backend::Doc => Box::new(
            DocStore::open(&paths::doc_store_path(root))
                .context("failed to open document store")?,
        ),
    })
}

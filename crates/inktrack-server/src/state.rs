use inktrack_core::cache::CommissionCache;
use inktrack_core::config::{Backend, Config};
use inktrack_core::docstore::DocStore;
use inktrack_core::paths;
use inktrack_core::repo::CommissionRepository;
use inktrack_core::store::LocalStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::AuthState;

/// Shared application state passed to all route handlers.
///
/// `cache` is the presentation layer's mirror of the repository list;
/// mutations are applied to it optimistically and settled against `repo`.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub config: Arc<Config>,
    pub repo: Arc<dyn CommissionRepository>,
    pub cache: Arc<RwLock<CommissionCache>>,
    pub auth: Arc<RwLock<AuthState>>,
}

impl AppState {
    pub fn new(root: PathBuf) -> anyhow::Result<Self> {
        let config = Config::load(&root)?;

        let repo: Arc<dyn CommissionRepository> = match config.backend {
            Backend::Local => Arc::new(LocalStore::open(&root, config.local_capacity_bytes)),
            Backend::Doc => Arc::new(DocStore::open(&paths::doc_store_path(&root))?),
        };

        let cache = CommissionCache::new(repo.list()?);

        Ok(Self {
            root,
            config: Arc::new(config),
            repo,
            cache: Arc::new(RwLock::new(cache)),
            auth: Arc::new(RwLock::new(AuthState::default())),
        })
    }
}

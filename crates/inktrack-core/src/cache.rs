use crate::commission::{self, Commission};
use crate::error::{InktrackError, Result};
use crate::types::Status;

/// In-memory mirror of the repository list held by the presentation layer.
///
/// Mutations are applied here speculatively before the backing store
/// confirms them: snapshot, apply, then [`CommissionCache::settle`] with the
/// store's result. The repository stays the source of truth; this is a cache
/// synchronized by load/mutate round-trips.
#[derive(Debug, Clone, Default)]
pub struct CommissionCache {
    items: Vec<Commission>,
}

/// Pre-mutation state captured by [`CommissionCache::snapshot`].
#[derive(Debug, Clone)]
pub struct CacheSnapshot(Vec<Commission>);

impl CommissionCache {
    pub fn new(items: Vec<Commission>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Commission] {
        &self.items
    }

    /// Load round-trip: replace the whole mirror with fresh store contents.
    pub fn replace_all(&mut self, items: Vec<Commission>) {
        self.items = items;
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot(self.items.clone())
    }

    pub fn restore(&mut self, snapshot: CacheSnapshot) {
        self.items = snapshot.0;
    }

    pub fn apply_advance(&mut self, id: &str) -> Result<Status> {
        commission::advance_status(&mut self.items, id)
    }

    pub fn apply_revert(&mut self, id: &str) -> Result<Status> {
        commission::revert_status(&mut self.items, id)
    }

    pub fn apply_status(&mut self, id: &str, status: Status) -> Result<()> {
        commission::set_status(&mut self.items, id, status)
    }

    /// Speculatively remove a record, returning it for inspection.
    pub fn remove(&mut self, id: &str) -> Result<Commission> {
        let pos = self
            .items
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| InktrackError::CommissionNotFound(id.to_string()))?;
        Ok(self.items.remove(pos))
    }

    /// Settle a speculative mutation: keep it if the store call succeeded,
    /// restore the snapshot if it failed. The error passes through either
    /// way so the caller can surface it.
    pub fn settle<T, E>(
        &mut self,
        snapshot: CacheSnapshot,
        outcome: std::result::Result<T, E>,
    ) -> std::result::Result<T, E> {
        match outcome {
            Ok(value) => Ok(value),
            Err(e) => {
                self.restore(snapshot);
                Err(e)
            }
        }
    }
}

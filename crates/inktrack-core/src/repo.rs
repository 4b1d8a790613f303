use crate::commission::Commission;
use crate::error::Result;
use crate::store::LocalStore;
use crate::types::Status;

/// Storage seam for commission records.
///
/// Implementations must fail with distinguishable [`crate::InktrackError`]
/// variants on backend failure so callers can roll back optimistic updates.
/// Last write wins; there is no version check.
pub trait CommissionRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Commission>>;
    /// Duplicate id is an error; returns the stored record.
    fn create(&self, commission: Commission) -> Result<Commission>;
    /// Also refreshes `last_updated`.
    fn update_status(&self, id: &str, status: Status) -> Result<()>;
    /// Irreversible; no soft delete.
    fn delete(&self, id: &str) -> Result<()>;
    /// Insert-or-overwrite by id. Returns the number of records written.
    fn bulk_upsert(&self, commissions: Vec<Commission>) -> Result<usize>;
}

/// One-way migration utility: push every record in the local blob into the
/// given store. Records keep their ids, so a re-run overwrites rather than
/// duplicates. An empty or missing local blob uploads nothing.
pub fn sync_local_to_cloud(
    local: &LocalStore,
    cloud: &dyn CommissionRepository,
) -> Result<usize> {
    let records = local.list()?;
    if records.is_empty() {
        return Ok(0);
    }
    cloud.bulk_upsert(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::CommissionDraft;
    use crate::docstore::DocStore;
    use crate::types::Category;
    use tempfile::TempDir;

    fn seeded_local(dir: &TempDir, names: &[&str]) -> LocalStore {
        let store = LocalStore::open(dir.path(), 1024 * 1024);
        for n in names {
            store
                .create(
                    Commission::create(
                        "inkwell",
                        CommissionDraft {
                            client_name: n.to_string(),
                            title: format!("{n} piece"),
                            category: Category::Standard,
                            ..Default::default()
                        },
                    )
                    .unwrap(),
                )
                .unwrap();
        }
        store
    }

    #[test]
    fn sync_uploads_every_local_record() {
        let dir = TempDir::new().unwrap();
        let local = seeded_local(&dir, &["a", "b", "c"]);
        let cloud = DocStore::open(&dir.path().join("cloud.redb")).unwrap();

        let count = sync_local_to_cloud(&local, &cloud).unwrap();
        assert_eq!(count, 3);
        assert_eq!(cloud.list().unwrap().len(), 3);

        // Re-running overwrites instead of duplicating.
        let count = sync_local_to_cloud(&local, &cloud).unwrap();
        assert_eq!(count, 3);
        assert_eq!(cloud.list().unwrap().len(), 3);
    }

    #[test]
    fn sync_with_empty_local_uploads_nothing() {
        let dir = TempDir::new().unwrap();
        let local = LocalStore::open(dir.path(), 1024 * 1024);
        let cloud = DocStore::open(&dir.path().join("cloud.redb")).unwrap();
        assert_eq!(sync_local_to_cloud(&local, &cloud).unwrap(), 0);
    }
}

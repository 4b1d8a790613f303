use crate::commission::Commission;
use crate::error::{InktrackError, Result};
use crate::repo::CommissionRepository;
use crate::types::Status;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;

const COMMISSIONS: TableDefinition<&str, &[u8]> = TableDefinition::new("commissions");

/// Document-store backend: one redb table keyed by commission id with
/// JSON-encoded values. Last write wins; there is no version check.
pub struct DocStore {
    db: Database,
}

fn store_err(e: impl std::fmt::Display) -> InktrackError {
    InktrackError::Store(e.to_string())
}

impl DocStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        let db = Database::create(path).map_err(store_err)?;
        // Create the table up front so an empty store lists cleanly.
        let tx = db.begin_write().map_err(store_err)?;
        tx.open_table(COMMISSIONS).map_err(store_err)?;
        tx.commit().map_err(store_err)?;
        Ok(Self { db })
    }

    fn get(&self, id: &str) -> Result<Option<Commission>> {
        let tx = self.db.begin_read().map_err(store_err)?;
        let table = tx.open_table(COMMISSIONS).map_err(store_err)?;
        match table.get(id).map_err(store_err)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    fn put(&self, commission: &Commission) -> Result<()> {
        let data = serde_json::to_vec(commission)?;
        let tx = self.db.begin_write().map_err(store_err)?;
        {
            let mut table = tx.open_table(COMMISSIONS).map_err(store_err)?;
            table
                .insert(commission.id.as_str(), data.as_slice())
                .map_err(store_err)?;
        }
        tx.commit().map_err(store_err)?;
        Ok(())
    }
}

impl CommissionRepository for DocStore {
    /// Records ordered by `last_updated` descending, ties broken by id for
    /// a stable listing.
    fn list(&self) -> Result<Vec<Commission>> {
        let tx = self.db.begin_read().map_err(store_err)?;
        let table = tx.open_table(COMMISSIONS).map_err(store_err)?;
        let mut items = Vec::new();
        for entry in table.iter().map_err(store_err)? {
            let (_, value) = entry.map_err(store_err)?;
            let commission: Commission = serde_json::from_slice(value.value())?;
            items.push(commission);
        }
        items.sort_by(|a, b| {
            b.last_updated
                .cmp(&a.last_updated)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(items)
    }

    fn create(&self, commission: Commission) -> Result<Commission> {
        commission.validate()?;
        if self.get(&commission.id)?.is_some() {
            return Err(InktrackError::CommissionExists(commission.id));
        }
        self.put(&commission)?;
        Ok(commission)
    }

    fn update_status(&self, id: &str, status: Status) -> Result<()> {
        let mut commission = self
            .get(id)?
            .ok_or_else(|| InktrackError::CommissionNotFound(id.to_string()))?;
        commission.status = status;
        commission.touch();
        self.put(&commission)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let tx = self.db.begin_write().map_err(store_err)?;
        let removed = {
            let mut table = tx.open_table(COMMISSIONS).map_err(store_err)?;
            let existed = table.remove(id).map_err(store_err)?.is_some();
            existed
        };
        tx.commit().map_err(store_err)?;
        if !removed {
            return Err(InktrackError::CommissionNotFound(id.to_string()));
        }
        Ok(())
    }

    fn bulk_upsert(&self, commissions: Vec<Commission>) -> Result<usize> {
        for c in &commissions {
            c.validate()?;
        }
        let count = commissions.len();
        let tx = self.db.begin_write().map_err(store_err)?;
        {
            let mut table = tx.open_table(COMMISSIONS).map_err(store_err)?;
            for c in &commissions {
                let data = serde_json::to_vec(c)?;
                table
                    .insert(c.id.as_str(), data.as_slice())
                    .map_err(store_err)?;
            }
        }
        tx.commit().map_err(store_err)?;
        Ok(count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::CommissionDraft;
    use crate::types::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn make(client: &str) -> Commission {
        Commission::create(
            "inkwell",
            CommissionDraft {
                client_name: client.to_string(),
                title: format!("{client} piece"),
                category: Category::Standard,
                price: 800.0,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_store_lists_cleanly() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::open(&dir.path().join("c.redb")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn create_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::open(&dir.path().join("c.redb")).unwrap();
        let c = store.create(make("MomoChan")).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed, vec![c.clone()]);
        assert!(matches!(
            store.create(c),
            Err(InktrackError::CommissionExists(_))
        ));
    }

    #[test]
    fn list_orders_by_last_updated_descending() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::open(&dir.path().join("c.redb")).unwrap();

        let mut old = make("old");
        old.last_updated = NaiveDate::from_ymd_opt(2023, 10, 20).unwrap();
        let mut fresh = make("fresh");
        fresh.last_updated = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();

        store.bulk_upsert(vec![old, fresh]).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed[0].client_name, "fresh");
        assert_eq!(listed[1].client_name, "old");
    }

    #[test]
    fn update_status_touches_record() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::open(&dir.path().join("c.redb")).unwrap();
        let c = store.create(make("a")).unwrap();

        store.update_status(&c.id, Status::InProgress).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed[0].status, Status::InProgress);

        assert!(matches!(
            store.update_status("c-missing", Status::Completed),
            Err(InktrackError::CommissionNotFound(_))
        ));
    }

    #[test]
    fn delete_unknown_id_errors() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::open(&dir.path().join("c.redb")).unwrap();
        let c = store.create(make("a")).unwrap();
        store.delete(&c.id).unwrap();
        assert!(matches!(
            store.delete(&c.id),
            Err(InktrackError::CommissionNotFound(_))
        ));
    }

    #[test]
    fn bulk_upsert_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::open(&dir.path().join("c.redb")).unwrap();
        let mut c = store.create(make("a")).unwrap();
        c.title = "second draft".to_string();
        store.bulk_upsert(vec![c.clone()]).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "second draft");
    }
}

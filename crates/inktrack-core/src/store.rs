use crate::commission::{self, Commission};
use crate::error::{InktrackError, Result};
use crate::io;
use crate::migrate;
use crate::paths;
use crate::repo::CommissionRepository;
use crate::types::{Category, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Local-blob backend: the whole ordered commission list serialized as one
/// JSON document in a single well-known file, written atomically.
///
/// Legacy status labels in the blob are migrated to the canonical four on
/// load. Writes are checked against a byte quota; exceeding it fails with
/// [`InktrackError::CapacityExceeded`] and leaves the previous blob intact.
pub struct LocalStore {
    path: PathBuf,
    capacity_bytes: u64,
}

/// On-disk record shape. `status` stays a raw label so blobs written by
/// earlier deployments can be migrated on load.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCommission {
    id: String,
    owner_id: String,
    client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    reference_attachments: Vec<String>,
    category: Category,
    price: f64,
    status: String,
    date_added: NaiveDate,
    last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl From<&Commission> for StoredCommission {
    fn from(c: &Commission) -> Self {
        Self {
            id: c.id.clone(),
            owner_id: c.owner_id.clone(),
            client_name: c.client_name.clone(),
            contact: c.contact.clone(),
            title: c.title.clone(),
            description: c.description.clone(),
            reference_attachments: c.reference_attachments.clone(),
            category: c.category,
            price: c.price,
            status: c.status.as_str().to_string(),
            date_added: c.date_added,
            last_updated: c.last_updated,
            notes: c.notes.clone(),
        }
    }
}

impl StoredCommission {
    fn into_commission(self) -> Result<Commission> {
        let status = migrate::canonical_status(&self.status)?;
        Ok(Commission {
            id: self.id,
            owner_id: self.owner_id,
            client_name: self.client_name,
            contact: self.contact,
            title: self.title,
            description: self.description,
            reference_attachments: self.reference_attachments,
            category: self.category,
            price: self.price,
            status,
            date_added: self.date_added,
            last_updated: self.last_updated,
            notes: self.notes,
        })
    }
}

impl LocalStore {
    pub fn open(root: &Path, capacity_bytes: u64) -> Self {
        Self {
            path: paths::local_store_path(root),
            capacity_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> Result<Vec<Commission>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        let stored: Vec<StoredCommission> = serde_json::from_str(&data)?;
        stored.into_iter().map(StoredCommission::into_commission).collect()
    }

    fn save_all(&self, items: &[Commission]) -> Result<()> {
        let stored: Vec<StoredCommission> = items.iter().map(StoredCommission::from).collect();
        let data = serde_json::to_vec_pretty(&stored)?;
        if data.len() as u64 > self.capacity_bytes {
            return Err(InktrackError::CapacityExceeded {
                needed: data.len() as u64,
                capacity: self.capacity_bytes,
            });
        }
        io::atomic_write(&self.path, &data)
    }
}

impl CommissionRepository for LocalStore {
    fn list(&self) -> Result<Vec<Commission>> {
        self.load_all()
    }

    fn create(&self, commission: Commission) -> Result<Commission> {
        commission.validate()?;
        let mut items = self.load_all()?;
        if commission::find(&items, &commission.id).is_some() {
            return Err(InktrackError::CommissionExists(commission.id));
        }
        items.push(commission.clone());
        self.save_all(&items)?;
        Ok(commission)
    }

    fn update_status(&self, id: &str, status: Status) -> Result<()> {
        let mut items = self.load_all()?;
        commission::set_status(&mut items, id, status)?;
        self.save_all(&items)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.load_all()?;
        let pos = items
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| InktrackError::CommissionNotFound(id.to_string()))?;
        items.remove(pos);
        self.save_all(&items)
    }

    fn bulk_upsert(&self, commissions: Vec<Commission>) -> Result<usize> {
        let mut items = self.load_all()?;
        let count = commissions.len();
        for incoming in commissions {
            incoming.validate()?;
            match items.iter_mut().find(|c| c.id == incoming.id) {
                Some(existing) => *existing = incoming,
                None => items.push(incoming),
            }
        }
        self.save_all(&items)?;
        Ok(count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::error::{InktrackError, Result};
use crate::types::{Category, Status};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_REFERENCE_ATTACHMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub id: String,
    /// Identity of the writer responsible for this commission. Immutable
    /// after creation.
    pub owner_id: String,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub title: String,
    pub description: String,
    /// Encoded reference images (character sheets, moodboards), at most 3.
    #[serde(default)]
    pub reference_attachments: Vec<String>,
    pub category: Category,
    pub price: f64,
    pub status: Status,
    pub date_added: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Caller-supplied fields for a new commission; ids and dates are stamped
/// by [`Commission::create`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommissionDraft {
    pub client_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub reference_attachments: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Commission {
    pub fn create(owner_id: impl Into<String>, draft: CommissionDraft) -> Result<Self> {
        let owner_id = owner_id.into();
        if owner_id.trim().is_empty() {
            return Err(InktrackError::MissingField("owner_id"));
        }
        if draft.client_name.trim().is_empty() {
            return Err(InktrackError::MissingField("client_name"));
        }
        if draft.title.trim().is_empty() {
            return Err(InktrackError::MissingField("title"));
        }
        if draft.price < 0.0 {
            return Err(InktrackError::NegativePrice(draft.price));
        }
        if draft.reference_attachments.len() > MAX_REFERENCE_ATTACHMENTS {
            return Err(InktrackError::TooManyAttachments {
                max: MAX_REFERENCE_ATTACHMENTS,
                got: draft.reference_attachments.len(),
            });
        }

        let today = Utc::now().date_naive();
        Ok(Self {
            id: new_id(),
            owner_id,
            client_name: draft.client_name,
            contact: draft.contact,
            title: draft.title,
            description: draft.description,
            reference_attachments: draft.reference_attachments,
            category: draft.category,
            price: draft.price,
            status: draft.status.unwrap_or(Status::NotStarted),
            date_added: today,
            last_updated: today,
            notes: draft.notes,
        })
    }

    /// Invariant check for records built outside [`Commission::create`]
    /// (bulk upserts, migrated blobs).
    pub fn validate(&self) -> Result<()> {
        crate::paths::validate_id(&self.id)?;
        if self.owner_id.trim().is_empty() {
            return Err(InktrackError::MissingField("owner_id"));
        }
        if self.price < 0.0 {
            return Err(InktrackError::NegativePrice(self.price));
        }
        if self.reference_attachments.len() > MAX_REFERENCE_ATTACHMENTS {
            return Err(InktrackError::TooManyAttachments {
                max: MAX_REFERENCE_ATTACHMENTS,
                got: self.reference_attachments.len(),
            });
        }
        Ok(())
    }

    /// Refresh `last_updated` to the current date. Every mutation path
    /// goes through this.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now().date_naive();
    }
}

/// Fresh commission id: `c-` plus the first 12 hex chars of a v4 uuid.
pub fn new_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("c-{}", &uuid[..12])
}

// ---------------------------------------------------------------------------
// List operations (operate on a mutable Vec<Commission>)
// ---------------------------------------------------------------------------

/// Step forward. A boundary no-op (already `Completed`) leaves the record
/// untouched, including `last_updated`.
pub fn advance_status(commissions: &mut [Commission], id: &str) -> Result<Status> {
    let c = find_mut(commissions, id)?;
    let next = c.status.advance();
    if next != c.status {
        c.status = next;
        c.touch();
    }
    Ok(c.status)
}

/// Step back. A boundary no-op (already `NotStarted`) leaves the record
/// untouched.
pub fn revert_status(commissions: &mut [Commission], id: &str) -> Result<Status> {
    let c = find_mut(commissions, id)?;
    let prev = c.status.revert();
    if prev != c.status {
        c.status = prev;
        c.touch();
    }
    Ok(c.status)
}

/// Direct jump to any status. Callers gate this behind the owner role.
pub fn set_status(commissions: &mut [Commission], id: &str, target: Status) -> Result<()> {
    let c = find_mut(commissions, id)?;
    c.status = target;
    c.touch();
    Ok(())
}

pub fn find<'a>(commissions: &'a [Commission], id: &str) -> Option<&'a Commission> {
    commissions.iter().find(|c| c.id == id)
}

fn find_mut<'a>(commissions: &'a mut [Commission], id: &str) -> Result<&'a mut Commission> {
    commissions
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| InktrackError::CommissionNotFound(id.to_string()))
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    /// NotStarted.
    pub queue: usize,
    /// InProgress or Revision.
    pub active: usize,
    /// Completed.
    pub done: usize,
}

pub fn count_statuses<'a, I>(commissions: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a Commission>,
{
    let mut counts = StatusCounts::default();
    for c in commissions {
        match c.status {
            Status::NotStarted => counts.queue += 1,
            Status::InProgress | Status::Revision => counts.active += 1,
            Status::Completed => counts.done += 1,
        }
    }
    counts
}

/// Human-readable summary: "2 queued, 3 active, 1 delivered"
pub fn summarize(commissions: &[Commission]) -> String {
    let counts = count_statuses(commissions);
    format!(
        "{} queued, {} active, {} delivered",
        counts.queue, counts.active, counts.done
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::commission::{count_statuses, Commission, StatusCounts};
use crate::session::Session;
use crate::types::{Role, StatusFilter};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct ViewQuery<'a> {
    pub search: &'a str,
    pub status: StatusFilter,
}

impl Default for ViewQuery<'_> {
    fn default() -> Self {
        Self {
            search: "",
            status: StatusFilter::All,
        }
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Why (or whether) the list is rendered. The two empty states are distinct
/// on purpose: one is an auth gate, the other is privacy-by-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListGate {
    /// Render the visible list.
    Visible,
    /// Owner mode without an authenticated identity: show the login prompt.
    LoginRequired,
    /// Client mode before any search text: show the "enter a name" placeholder.
    AwaitingQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub gate: ListGate,
    /// Matching commissions in input order; never re-sorted here.
    pub visible: Vec<Commission>,
    /// Aggregates over the role's full accessible set, not the current search.
    pub counts: StatusCounts,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Pure, deterministic view-state derivation. Same inputs always produce the
/// same visible list (in input order) and the same aggregates.
pub fn derive(commissions: &[Commission], session: &Session, query: &ViewQuery) -> ViewState {
    // 1. Ownership narrowing. Clients can reach every record (but only via
    //    search, below); an owner sees exactly their own, and an owner
    //    without identity sees nothing.
    let accessible: Vec<&Commission> = match (session.role, session.identity.as_deref()) {
        (Role::Owner, Some(me)) => commissions.iter().filter(|c| c.owner_id == me).collect(),
        (Role::Owner, None) => Vec::new(),
        (Role::Client, _) => commissions.iter().collect(),
    };

    // 4. Aggregates come from the accessible set before text/status filters.
    let counts = count_statuses(accessible.iter().copied());

    let term = query.search.trim().to_lowercase();

    // 5. Gate.
    let gate = match (session.role, session.identity.as_deref()) {
        (Role::Owner, Some(_)) => ListGate::Visible,
        (Role::Owner, None) => ListGate::LoginRequired,
        (Role::Client, _) if !term.is_empty() => ListGate::Visible,
        (Role::Client, _) => ListGate::AwaitingQuery,
    };

    // 2 + 3. Text match and status filter.
    let visible = if gate == ListGate::Visible {
        accessible
            .into_iter()
            .filter(|c| matches_search(c, &term))
            .filter(|c| query.status.matches(c.status))
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    ViewState {
        gate,
        visible,
        counts,
    }
}

/// Case-insensitive substring match against client name, title, and id.
/// An empty term matches everything; the client-role empty case never gets
/// here because the gate short-circuits it.
fn matches_search(c: &Commission, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    c.client_name.to_lowercase().contains(term)
        || c.title.to_lowercase().contains(term)
        || c.id.to_lowercase().contains(term)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Write-through seam.
//!
//! Every successful mutation is reported to the store's listeners as a
//! [`StoreChange`]. Listeners run under the store's write guard, in mutation
//! order, and must not block. A persistence layer plugs in here without any
//! change to repository callers.

use serde::{Deserialize, Serialize};
use shutterdesk_core::types::DbId;

/// The five record kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Task,
    Contact,
    BudgetItem,
    CalendarEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

/// One applied mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChange {
    pub kind: EntityKind,
    pub action: ChangeAction,
    pub id: DbId,
    /// Owning project; `None` for projects themselves.
    pub project_id: Option<DbId>,
}

/// Receives every applied mutation.
pub trait StoreListener: Send + Sync {
    fn on_change(&self, change: &StoreChange);
}

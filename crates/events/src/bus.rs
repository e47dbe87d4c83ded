//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`ChangeEvent`]s. It is
//! shared via `Arc<EventBus>` between the store (as a listener) and the
//! application state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shutterdesk_core::types::DbId;
use shutterdesk_store::{ChangeAction, EntityKind, StoreChange, StoreListener};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// A mutation applied to the store, stamped with the time it was published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Dot-separated event name, e.g. `"task.deleted"`.
    pub event_type: String,
    pub kind: EntityKind,
    pub action: ChangeAction,
    pub entity_id: DbId,
    pub project_id: Option<DbId>,
    pub timestamp: DateTime<Utc>,
}

impl From<&StoreChange> for ChangeEvent {
    fn from(change: &StoreChange) -> Self {
        Self {
            event_type: event_type(change.kind, change.action),
            kind: change.kind,
            action: change.action,
            entity_id: change.id,
            project_id: change.project_id,
            timestamp: Utc::now(),
        }
    }
}

fn event_type(kind: EntityKind, action: ChangeAction) -> String {
    let kind = match kind {
        EntityKind::Project => "project",
        EntityKind::Task => "task",
        EntityKind::Contact => "contact",
        EntityKind::BudgetItem => "budget_item",
        EntityKind::CalendarEvent => "calendar_event",
    };
    let action = match action {
        ChangeAction::Created => "created",
        ChangeAction::Updated => "updated",
        ChangeAction::Deleted => "deleted",
    };
    format!("{kind}.{action}")
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChangeEvent`].
pub struct EventBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: ChangeEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl StoreListener for EventBus {
    fn on_change(&self, change: &StoreChange) {
        self.publish(ChangeEvent::from(change));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Repository for the `calendar_events` table.

use shutterdesk_core::error::CoreError;
use shutterdesk_core::types::DbId;

use crate::models::calendar_event::{CalendarEvent, CreateCalendarEvent, UpdateCalendarEvent};
use crate::store::Store;

/// Provides CRUD operations for calendar events.
pub struct CalendarEventRepo;

impl CalendarEventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(store: &Store, input: &CreateCalendarEvent) -> CalendarEvent {
        let event: CalendarEvent = store.insert(input).await;
        tracing::debug!(
            event_id = %event.id,
            project_id = %event.project_id,
            event_type = %event.event_type,
            "Calendar event created",
        );
        event
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<CalendarEvent> {
        store.get(id).await
    }

    pub async fn list(store: &Store) -> Vec<CalendarEvent> {
        store.list().await
    }

    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<CalendarEvent> {
        store.list_by_project(project_id).await
    }

    /// Update an event. Only supplied fields in `input` are applied.
    ///
    /// The merged start/end pair is checked under the same write guard as
    /// the update, so a rejected patch leaves the event untouched. Returns
    /// `Ok(None)` if no row with the given `id` exists.
    pub async fn update(
        store: &Store,
        id: DbId,
        input: &UpdateCalendarEvent,
    ) -> Result<Option<CalendarEvent>, CoreError> {
        store.update_checked(id, input, window_holds).await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(store: &Store, id: DbId) -> bool {
        store.delete::<CalendarEvent>(id).await
    }
}

/// The window `patch` would leave on `current` must not end before it starts.
fn window_holds(current: &CalendarEvent, patch: &UpdateCalendarEvent) -> Result<(), CoreError> {
    patch.check_against(current).map_err(|err| {
        let message = err
            .message
            .map(|m| m.to_string())
            .unwrap_or_else(|| err.code.to_string());
        CoreError::Validation(message)
    })
}

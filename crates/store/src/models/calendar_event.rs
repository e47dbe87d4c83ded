//! Calendar event model and DTOs.

use serde::{Deserialize, Serialize};
use shutterdesk_core::enums::EventType;
use shutterdesk_core::input::{
    deserialize_nullable, deserialize_nullable_timestamp, deserialize_optional_timestamp,
    deserialize_timestamp,
};
use shutterdesk_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

use super::{merge, not_blank};
use crate::listener::EntityKind;
use crate::store::Tables;
use crate::table::{Entity, Owned, Table};

/// A scheduled shoot, meeting or deadline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "end_not_before_start"))]
pub struct CreateCalendarEvent {
    #[serde(default)]
    pub project_id: DbId,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_date: Timestamp,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCalendarEvent {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_nullable_timestamp")]
    pub end_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub location: Option<Option<String>>,
}

fn end_not_before_start(input: &CreateCalendarEvent) -> Result<(), ValidationError> {
    check_window(input.start_date, input.end_date)
}

fn check_window(start: Timestamp, end: Option<Timestamp>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(ValidationError::new("end_before_start")
            .with_message("end_date must not be before start_date".into())),
        _ => Ok(()),
    }
}

impl UpdateCalendarEvent {
    /// Check the start/end pair that applying this patch to `current`
    /// would produce.
    pub fn check_against(&self, current: &CalendarEvent) -> Result<(), ValidationError> {
        let start = self.start_date.unwrap_or(current.start_date);
        let end = self.end_date.unwrap_or(current.end_date);
        check_window(start, end)
    }
}

impl Entity for CalendarEvent {
    const KIND: EntityKind = EntityKind::CalendarEvent;
    type Create = CreateCalendarEvent;
    type Update = UpdateCalendarEvent;

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Option<DbId> {
        Some(self.project_id)
    }

    fn build(id: DbId, _now: Timestamp, input: &CreateCalendarEvent) -> Self {
        Self {
            id,
            project_id: input.project_id,
            title: input.title.clone(),
            event_type: input.event_type,
            start_date: input.start_date,
            end_date: input.end_date,
            description: input.description.clone(),
            location: input.location.clone(),
        }
    }

    fn apply(&mut self, input: &UpdateCalendarEvent, _now: Timestamp) {
        merge(&mut self.title, &input.title);
        merge(&mut self.event_type, &input.event_type);
        merge(&mut self.start_date, &input.start_date);
        merge(&mut self.end_date, &input.end_date);
        merge(&mut self.description, &input.description);
        merge(&mut self.location, &input.location);
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.calendar_events
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.calendar_events
    }
}

impl Owned for CalendarEvent {
    fn project_id(&self) -> DbId {
        self.project_id
    }
}

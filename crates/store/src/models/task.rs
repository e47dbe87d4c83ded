//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use shutterdesk_core::enums::{TaskSection, TaskStatus};
use shutterdesk_core::input::{
    deserialize_nullable, deserialize_nullable_timestamp, deserialize_optional_timestamp,
};
use shutterdesk_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{merge, not_blank};
use crate::listener::EntityKind;
use crate::store::Tables;
use crate::table::{Entity, Owned, Table};

/// A to-do item within a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub section: TaskSection,
    pub status: TaskStatus,
    pub assignee: Option<String>,
    /// Shown on the timeline as a deadline, whatever the status.
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a task. `project_id` is taken from the route when
/// created through the API.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default)]
    pub project_id: DbId,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    /// Defaults to `general`.
    #[serde(default)]
    pub section: TaskSection,
    /// Defaults to `to_do`.
    #[serde(default)]
    pub status: TaskStatus,
    pub assignee: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub due_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    pub section: Option<TaskSection>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub assignee: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable_timestamp")]
    pub due_date: Option<Option<Timestamp>>,
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;
    type Create = CreateTask;
    type Update = UpdateTask;

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Option<DbId> {
        Some(self.project_id)
    }

    fn build(id: DbId, now: Timestamp, input: &CreateTask) -> Self {
        Self {
            id,
            project_id: input.project_id,
            title: input.title.clone(),
            section: input.section,
            status: input.status,
            assignee: input.assignee.clone(),
            due_date: input.due_date,
            created_at: now,
        }
    }

    fn apply(&mut self, input: &UpdateTask, _now: Timestamp) {
        merge(&mut self.title, &input.title);
        merge(&mut self.section, &input.section);
        merge(&mut self.status, &input.status);
        merge(&mut self.assignee, &input.assignee);
        merge(&mut self.due_date, &input.due_date);
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.tasks
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.tasks
    }
}

impl Owned for Task {
    fn project_id(&self) -> DbId {
        self.project_id
    }
}

//! Multi-table writes: project creation with template seeding, and project
//! deletion with removal of every owned record.
//!
//! Both run under a single write guard, so no reader ever observes a
//! project without its seeded tasks or a dependent whose project is gone.

use serde::Serialize;
use shutterdesk_core::templates;
use shutterdesk_core::types::DbId;

use crate::listener::{ChangeAction, EntityKind};
use crate::models::budget_item::BudgetItem;
use crate::models::calendar_event::CalendarEvent;
use crate::models::contact::Contact;
use crate::models::project::{CreateProject, Project};
use crate::models::task::{CreateTask, Task};
use crate::store::{Store, Tables};
use crate::table::{Entity, Owned};

/// Number of dependent records removed alongside a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub tasks: usize,
    pub contacts: usize,
    pub budget_items: usize,
    pub calendar_events: usize,
}

impl CascadeReport {
    pub fn total(&self) -> usize {
        self.tasks + self.contacts + self.budget_items + self.calendar_events
    }
}

/// Create a project and seed the tasks of its type's template.
///
/// Returns the project and the seeded tasks in template order.
pub async fn create_project(store: &Store, input: &CreateProject) -> (Project, Vec<Task>) {
    let mut tables = store.write().await;
    let project: Project = store.insert_locked(&mut tables, input);

    let seeded: Vec<Task> = templates::for_project(project.project_type)
        .iter()
        .map(|template| {
            let task = CreateTask {
                project_id: project.id,
                title: template.title.to_string(),
                section: template.section,
                ..Default::default()
            };
            store.insert_locked::<Task>(&mut tables, &task)
        })
        .collect();

    (project, seeded)
}

/// Delete a project and everything it owns.
///
/// Returns `None` when no project with `id` exists; nothing is touched in
/// that case.
pub async fn delete_project(store: &Store, id: DbId) -> Option<CascadeReport> {
    let mut tables = store.write().await;
    Project::table_mut(&mut tables).remove(id)?;

    let report = CascadeReport {
        tasks: sweep::<Task>(store, &mut tables, id),
        contacts: sweep::<Contact>(store, &mut tables, id),
        budget_items: sweep::<BudgetItem>(store, &mut tables, id),
        calendar_events: sweep::<CalendarEvent>(store, &mut tables, id),
    };
    store.notify(EntityKind::Project, ChangeAction::Deleted, id, None);

    Some(report)
}

/// Remove every `E` owned by `project_id`, reporting each removal.
fn sweep<E: Owned>(store: &Store, tables: &mut Tables, project_id: DbId) -> usize {
    let removed = E::table_mut(tables).remove_by_project(project_id);
    for id in &removed {
        store.notify(E::KIND, ChangeAction::Deleted, *id, Some(project_id));
    }
    removed.len()
}

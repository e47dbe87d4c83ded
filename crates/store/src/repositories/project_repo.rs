//! Repository for the `projects` table.

use shutterdesk_core::types::DbId;

use crate::cascade::{self, CascadeReport};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::Store;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Tasks from the project type's template are seeded in the same write.
    pub async fn create(store: &Store, input: &CreateProject) -> Project {
        let (project, seeded) = cascade::create_project(store, input).await;
        tracing::info!(
            project_id = %project.id,
            project_type = ?project.project_type,
            tasks_seeded = seeded.len(),
            "Project created",
        );
        project
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Project> {
        store.get(id).await
    }

    /// List all projects in creation order.
    pub async fn list(store: &Store) -> Vec<Project> {
        store.list().await
    }

    /// Update a project. Only supplied fields in `input` are applied.
    ///
    /// Changing the type does not re-seed tasks. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update(store: &Store, id: DbId, input: &UpdateProject) -> Option<Project> {
        store.update(id, input).await
    }

    /// Delete a project and all records it owns.
    ///
    /// Returns `None` if the project did not exist.
    pub async fn delete(store: &Store, id: DbId) -> Option<CascadeReport> {
        let report = cascade::delete_project(store, id).await?;
        tracing::info!(
            project_id = %id,
            removed = report.total(),
            tasks = report.tasks,
            contacts = report.contacts,
            budget_items = report.budget_items,
            calendar_events = report.calendar_events,
            "Project deleted",
        );
        Some(report)
    }
}

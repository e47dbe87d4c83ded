//! Repository for the `tasks` table.

use shutterdesk_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::store::Store;

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The caller is responsible for checking that `input.project_id` exists.
    pub async fn create(store: &Store, input: &CreateTask) -> Task {
        let task: Task = store.insert(input).await;
        tracing::debug!(task_id = %task.id, project_id = %task.project_id, "Task created");
        task
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Task> {
        store.get(id).await
    }

    /// List every task across all projects, in creation order.
    pub async fn list(store: &Store) -> Vec<Task> {
        store.list().await
    }

    /// List the tasks of one project, in creation order.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<Task> {
        store.list_by_project(project_id).await
    }

    /// Update a task. Only supplied fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(store: &Store, id: DbId, input: &UpdateTask) -> Option<Task> {
        store.update(id, input).await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(store: &Store, id: DbId) -> bool {
        store.delete::<Task>(id).await
    }
}

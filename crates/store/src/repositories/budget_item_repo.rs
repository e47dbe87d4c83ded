//! Repository for the `budget_items` table.

use shutterdesk_core::budget::BudgetSummary;
use shutterdesk_core::types::DbId;

use crate::models::budget_item::{BudgetItem, CreateBudgetItem, UpdateBudgetItem};
use crate::models::project::Project;
use crate::store::Store;
use crate::table::Entity;

/// Provides CRUD operations for budget lines.
pub struct BudgetItemRepo;

impl BudgetItemRepo {
    /// Insert a new budget line, returning the created row.
    pub async fn create(store: &Store, input: &CreateBudgetItem) -> BudgetItem {
        let item: BudgetItem = store.insert(input).await;
        tracing::debug!(
            budget_item_id = %item.id,
            project_id = %item.project_id,
            "Budget item created",
        );
        item
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<BudgetItem> {
        store.get(id).await
    }

    pub async fn list(store: &Store) -> Vec<BudgetItem> {
        store.list().await
    }

    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<BudgetItem> {
        store.list_by_project(project_id).await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        store: &Store,
        id: DbId,
        input: &UpdateBudgetItem,
    ) -> Option<BudgetItem> {
        store.update(id, input).await
    }

    /// Delete a budget line by ID. Returns `true` if a row was removed.
    pub async fn delete(store: &Store, id: DbId) -> bool {
        store.delete::<BudgetItem>(id).await
    }

    /// Roll up a project's budget lines against its top-line budget.
    ///
    /// Project and lines are read under one guard. Returns `None` if the
    /// project does not exist.
    pub async fn summary(store: &Store, project_id: DbId) -> Option<BudgetSummary> {
        let tables = store.read().await;
        let project = Project::table(&tables).get(project_id)?;
        let lines = BudgetItem::table(&tables)
            .iter_by_project(project_id)
            .map(BudgetItem::cost_entry);
        Some(BudgetSummary::compute(project.budget, lines))
    }
}

//! Portfolio roll-up for the dashboard view.

use chrono::Duration;
use serde::Serialize;
use shutterdesk_core::enums::{ProjectStatus, TaskStatus};
use shutterdesk_core::types::{DbId, Timestamp};

use crate::models::budget_item::BudgetItem;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::store::Store;
use crate::table::Entity;

/// How far ahead a shoot counts as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingShoot {
    pub project_id: DbId,
    pub name: String,
    pub client_name: Option<String>,
    pub shoot_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub project_count: usize,
    /// One entry per status, in lifecycle order, including zero counts.
    pub projects_by_status: Vec<StatusCount>,
    pub open_tasks: usize,
    pub completed_tasks: usize,
    pub total_budget: i64,
    pub total_planned: i64,
    pub total_actual: i64,
    /// Shoots in `[now, now + 30 days]`, soonest first.
    pub upcoming_shoots: Vec<UpcomingShoot>,
}

pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute the roll-up under one read guard.
    pub async fn summary(store: &Store, now: Timestamp) -> DashboardSummary {
        let tables = store.read().await;
        let projects = Project::table(&tables);
        let tasks = Task::table(&tables);
        let budget_items = BudgetItem::table(&tables);

        let projects_by_status = ProjectStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: projects.iter().filter(|p| p.status == status).count(),
            })
            .collect();

        let completed_tasks = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();

        let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);
        let mut upcoming_shoots: Vec<UpcomingShoot> = projects
            .iter()
            .filter_map(|p| {
                let shoot_date = p.shoot_date.filter(|d| *d >= now && *d <= horizon)?;
                Some(UpcomingShoot {
                    project_id: p.id,
                    name: p.name.clone(),
                    client_name: p.client_name.clone(),
                    shoot_date,
                })
            })
            .collect();
        upcoming_shoots.sort_by_key(|s| s.shoot_date);

        DashboardSummary {
            project_count: projects.len(),
            projects_by_status,
            open_tasks: tasks.len() - completed_tasks,
            completed_tasks,
            total_budget: saturating_sum(projects.iter().map(|p| p.budget)),
            total_planned: saturating_sum(budget_items.iter().map(|b| b.planned_cost)),
            total_actual: saturating_sum(budget_items.iter().map(|b| b.actual_cost)),
            upcoming_shoots,
        }
    }
}

fn saturating_sum(amounts: impl Iterator<Item = i64>) -> i64 {
    amounts.fold(0, i64::saturating_add)
}

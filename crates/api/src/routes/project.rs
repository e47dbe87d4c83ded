//! Route definitions for the `/projects` resource.
//!
//! Also nests creation and per-project listing of every dependent kind
//! under `/projects/{id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{budget_item, calendar_event, contact, project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// PATCH  /{id}                                -> update
/// DELETE /{id}                                -> delete
/// GET    /{id}/budget-summary                 -> budget_summary
///
/// GET    /{id}/tasks                          -> task::list_by_project
/// POST   /{id}/tasks                          -> task::create
/// GET    /{id}/contacts                       -> contact::list_by_project
/// POST   /{id}/contacts                       -> contact::create
/// GET    /{id}/budget-items                   -> budget_item::list_by_project
/// POST   /{id}/budget-items                   -> budget_item::create
/// GET    /{id}/calendar-events                -> calendar_event::list_by_project
/// POST   /{id}/calendar-events                -> calendar_event::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/budget-summary", get(project::budget_summary))
        .route(
            "/{id}/tasks",
            get(task::list_by_project).post(task::create),
        )
        .route(
            "/{id}/contacts",
            get(contact::list_by_project).post(contact::create),
        )
        .route(
            "/{id}/budget-items",
            get(budget_item::list_by_project).post(budget_item::create),
        )
        .route(
            "/{id}/calendar-events",
            get(calendar_event::list_by_project).post(calendar_event::create),
        )
}

pub mod budget_item;
pub mod calendar_event;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod task;
pub mod timeline;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete (cascades)
/// /projects/{id}/budget-summary                    budget roll-up
/// /projects/{id}/tasks                             list, create
/// /projects/{id}/contacts                          list, create
/// /projects/{id}/budget-items                      list, create
/// /projects/{id}/calendar-events                   list, create
///
/// /tasks, /contacts, /budget-items, /calendar-events
///                                                  list all
/// /{kind}/{id}                                     get, update, delete
///
/// /timeline/day|week|month?date=                   timeline windows
/// /timeline/navigate?view=&date=&direction=        step the reference date
///
/// /dashboard                                       portfolio roll-up
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/contacts", contact::router())
        .nest("/budget-items", budget_item::router())
        .nest("/calendar-events", calendar_event::router())
        .nest("/timeline", timeline::router())
        .merge(dashboard::router())
}

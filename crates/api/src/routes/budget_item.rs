//! Route definitions for the `/budget-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::budget_item;
use crate::state::AppState;

/// Routes mounted at `/budget-items`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(budget_item::list)).route(
        "/{id}",
        get(budget_item::get_by_id)
            .put(budget_item::update)
            .patch(budget_item::update)
            .delete(budget_item::delete),
    )
}

//! Route definitions for the `/timeline` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// Routes mounted at `/timeline`.
///
/// ```text
/// GET    /day?date=                          -> day
/// GET    /week?date=                         -> week
/// GET    /month?date=                        -> month
/// GET    /navigate?view=&date=&direction=    -> navigate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/day", get(timeline::day))
        .route("/week", get(timeline::week))
        .route("/month", get(timeline::month))
        .route("/navigate", get(timeline::navigate))
}

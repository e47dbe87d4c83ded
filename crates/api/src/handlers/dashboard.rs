//! Handler for the portfolio dashboard.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use shutterdesk_store::dashboard::{DashboardRepo, DashboardSummary};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/dashboard
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.store, Utc::now()).await;
    Ok(Json(summary))
}

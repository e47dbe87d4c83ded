//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::budget::BudgetSummary;
use shutterdesk_core::types::DbId;
use shutterdesk_store::models::project::{CreateProject, Project, UpdateProject};
use shutterdesk_store::repositories::{BudgetItemRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Seeds the template tasks for the project's type in the same write.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.store, &input).await;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.store).await;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT|PATCH /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.store, id, &input)
        .await
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Removes every task, contact, budget item and calendar event owned by the
/// project.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match ProjectRepo::delete(&state.store, id).await {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::not_found("Project", id)),
    }
}

/// GET /api/v1/projects/{id}/budget-summary
pub async fn budget_summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetSummary>> {
    let summary = BudgetItemRepo::summary(&state.store, id)
        .await
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(summary))
}

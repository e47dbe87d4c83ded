//! Handlers for the `/budget-items` resource.
//!
//! Creation and per-project listing are nested under
//! `/projects/{project_id}/budget-items`; everything else is addressed by id.
//! The per-project roll-up lives at `/projects/{id}/budget-summary`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::types::DbId;
use shutterdesk_store::models::budget_item::{BudgetItem, CreateBudgetItem, UpdateBudgetItem};
use shutterdesk_store::repositories::BudgetItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/budget-items
///
/// Overrides `input.project_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<CreateBudgetItem>,
) -> AppResult<(StatusCode, Json<BudgetItem>)> {
    input.project_id = project_id;
    let item = BudgetItemRepo::create(&state.store, &input).await;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/projects/{project_id}/budget-items
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<BudgetItem>>> {
    let items = BudgetItemRepo::list_by_project(&state.store, project_id).await;
    Ok(Json(items))
}

/// GET /api/v1/budget-items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BudgetItem>>> {
    let items = BudgetItemRepo::list(&state.store).await;
    Ok(Json(items))
}

/// GET /api/v1/budget-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetItem>> {
    let item = BudgetItemRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::not_found("BudgetItem", id))?;
    Ok(Json(item))
}

/// PUT|PATCH /api/v1/budget-items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBudgetItem>,
) -> AppResult<Json<BudgetItem>> {
    let item = BudgetItemRepo::update(&state.store, id, &input)
        .await
        .ok_or(AppError::not_found("BudgetItem", id))?;
    Ok(Json(item))
}

/// DELETE /api/v1/budget-items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if BudgetItemRepo::delete(&state.store, id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("BudgetItem", id))
    }
}

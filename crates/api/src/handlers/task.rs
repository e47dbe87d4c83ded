//! Handlers for the `/tasks` resource.
//!
//! Creation and per-project listing are nested under
//! `/projects/{project_id}/tasks`; everything else is addressed by id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::types::DbId;
use shutterdesk_store::models::task::{CreateTask, Task, UpdateTask};
use shutterdesk_store::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/tasks
///
/// Overrides `input.project_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.project_id = project_id;
    let task = TaskRepo::create(&state.store, &input).await;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/projects/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_project(&state.store, project_id).await;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.store).await;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT|PATCH /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::update(&state.store, id, &input)
        .await
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.store, id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Task", id))
    }
}

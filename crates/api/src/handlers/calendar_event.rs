//! Handlers for the `/calendar-events` resource.
//!
//! Creation and per-project listing are nested under
//! `/projects/{project_id}/calendar-events`; everything else is addressed by id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::types::DbId;
use shutterdesk_store::models::calendar_event::{
    CalendarEvent, CreateCalendarEvent, UpdateCalendarEvent,
};
use shutterdesk_store::repositories::CalendarEventRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/calendar-events
///
/// Overrides `input.project_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<CreateCalendarEvent>,
) -> AppResult<(StatusCode, Json<CalendarEvent>)> {
    input.project_id = project_id;
    let event = CalendarEventRepo::create(&state.store, &input).await;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/projects/{project_id}/calendar-events
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let events = CalendarEventRepo::list_by_project(&state.store, project_id).await;
    Ok(Json(events))
}

/// GET /api/v1/calendar-events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CalendarEvent>>> {
    let events = CalendarEventRepo::list(&state.store).await;
    Ok(Json(events))
}

/// GET /api/v1/calendar-events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CalendarEvent>> {
    let event = CalendarEventRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::not_found("CalendarEvent", id))?;
    Ok(Json(event))
}

/// PUT|PATCH /api/v1/calendar-events/{id}
///
/// The patched start/end pair is checked against the stored event in the
/// same write as the update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCalendarEvent>,
) -> AppResult<Json<CalendarEvent>> {
    let event = CalendarEventRepo::update(&state.store, id, &input)
        .await?
        .ok_or(AppError::not_found("CalendarEvent", id))?;
    Ok(Json(event))
}

/// DELETE /api/v1/calendar-events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CalendarEventRepo::delete(&state.store, id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("CalendarEvent", id))
    }
}

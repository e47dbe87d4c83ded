//! Handlers for the `/contacts` resource.
//!
//! Creation and per-project listing are nested under
//! `/projects/{project_id}/contacts`; everything else is addressed by id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdesk_core::types::DbId;
use shutterdesk_store::models::contact::{Contact, CreateContact, UpdateContact};
use shutterdesk_store::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/contacts
///
/// Overrides `input.project_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    input.project_id = project_id;
    let contact = ContactRepo::create(&state.store, &input).await;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/v1/projects/{project_id}/contacts
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list_by_project(&state.store, project_id).await;
    Ok(Json(contacts))
}

/// GET /api/v1/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list(&state.store).await;
    Ok(Json(contacts))
}

/// GET /api/v1/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::not_found("Contact", id))?;
    Ok(Json(contact))
}

/// PUT|PATCH /api/v1/contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateContact>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::update(&state.store, id, &input)
        .await
        .ok_or(AppError::not_found("Contact", id))?;
    Ok(Json(contact))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ContactRepo::delete(&state.store, id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Contact", id))
    }
}

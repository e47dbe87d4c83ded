//! Handlers for the `/timeline` resource.
//!
//! Windows are computed in the configured timeline offset; a missing
//! `date` means today in that offset.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use shutterdesk_core::calendar::{self, CalendarView};
use shutterdesk_core::timeline::{DayWindow, MonthWindow, WeekWindow};
use shutterdesk_store::timeline::TimelineRepo;

use crate::error::AppResult;
use crate::query::{DateParams, NavigateParams};
use crate::state::AppState;

/// Response for `/timeline/navigate`.
#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub view: CalendarView,
    pub date: NaiveDate,
}

/// The requested date, or today in the timeline offset. Dates outside the
/// supported years are rejected.
fn reference_date(state: &AppState, date: Option<NaiveDate>) -> AppResult<NaiveDate> {
    let date =
        date.unwrap_or_else(|| calendar::local_date(Utc::now(), state.config.timeline_offset()));
    Ok(calendar::check_supported(date)?)
}

/// GET /api/v1/timeline/day?date=YYYY-MM-DD
pub async fn day(
    State(state): State<AppState>,
    Query(params): Query<DateParams>,
) -> AppResult<Json<DayWindow>> {
    let date = reference_date(&state, params.date)?;
    let window = TimelineRepo::day(&state.store, state.config.timeline_offset(), date).await;
    Ok(Json(window))
}

/// GET /api/v1/timeline/week?date=YYYY-MM-DD
pub async fn week(
    State(state): State<AppState>,
    Query(params): Query<DateParams>,
) -> AppResult<Json<WeekWindow>> {
    let date = reference_date(&state, params.date)?;
    let window = TimelineRepo::week(&state.store, state.config.timeline_offset(), date).await;
    Ok(Json(window))
}

/// GET /api/v1/timeline/month?date=YYYY-MM-DD
pub async fn month(
    State(state): State<AppState>,
    Query(params): Query<DateParams>,
) -> AppResult<Json<MonthWindow>> {
    let date = reference_date(&state, params.date)?;
    let window = TimelineRepo::month(&state.store, state.config.timeline_offset(), date).await;
    Ok(Json(window))
}

/// GET /api/v1/timeline/navigate?view=&date=&direction=
///
/// Stateless: only transforms the reference date.
pub async fn navigate(
    State(state): State<AppState>,
    Query(params): Query<NavigateParams>,
) -> AppResult<Json<NavigateResponse>> {
    let date = reference_date(&state, params.date)?;
    let date = calendar::check_supported(calendar::navigate(
        params.view,
        date,
        params.direction,
        state.config.timeline_offset(),
        Utc::now(),
    ))?;
    Ok(Json(NavigateResponse {
        view: params.view,
        date,
    }))
}

//! Timeline windows and navigation over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_project, get, post_json, test_state};
use serde_json::json;
use shutterdesk_api::state::AppState;

/// Shoot at 10:00, task deadline at 23:00 and meeting at 08:00, all on
/// 2025-06-01.
async fn seeded_state() -> AppState {
    let state = test_state();
    let project = create_project(
        &state,
        json!({"name": "Garden wedding", "shoot_date": "2025-06-01T10:00"}),
    )
    .await;
    let id = project["id"].as_str().unwrap();

    post_json(
        build_test_app(state.clone()),
        &format!("/api/v1/projects/{id}/tasks"),
        json!({"title": "Send sneak peeks", "status": "completed", "due_date": "2025-06-01T23:00"}),
    )
    .await;
    post_json(
        build_test_app(state.clone()),
        &format!("/api/v1/projects/{id}/calendar-events"),
        json!({"title": "Walkthrough", "type": "meeting", "start_date": "2025-06-01T08:00"}),
    )
    .await;
    state
}

#[tokio::test]
async fn day_window_merges_and_orders_sources() {
    let state = seeded_state().await;

    let response = get(build_test_app(state), "/api/v1/timeline/day?date=2025-06-01").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["date"], "2025-06-01");
    let items = json["items"].as_array().unwrap();
    let summary: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i["type"].as_str().unwrap(), i["source"].as_str().unwrap()))
        .collect();
    assert_eq!(
        summary,
        [
            ("meeting", "calendar_event"),
            ("photoshoot", "project_shoot"),
            ("deadline", "task_deadline"),
        ]
    );
}

#[tokio::test]
async fn week_window_starts_on_sunday() {
    let state = seeded_state().await;

    let response = get(build_test_app(state), "/api/v1/timeline/week?date=2025-06-04").await;
    let json = body_json(response).await;

    assert_eq!(json["start"], "2025-06-01");
    assert_eq!(json["end"], "2025-06-07");
    assert_eq!(json["days"].as_array().unwrap().len(), 7);
    assert_eq!(json["days"][0]["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn month_window_is_whole_weeks() {
    let state = seeded_state().await;

    let response = get(build_test_app(state), "/api/v1/timeline/month?date=2025-02-10").await;
    let json = body_json(response).await;
    let days = json["days"].as_array().unwrap();

    assert_eq!(days.len() % 7, 0);
    assert_eq!(json["year"], 2025);
    assert_eq!(json["month"], 2);
    assert_eq!(days[0]["in_month"], false);
    assert!(days.iter().any(|d| d["date"] == "2025-02-01" && d["in_month"] == true));
    assert!(days.iter().any(|d| d["date"] == "2025-02-28"));
}

#[tokio::test]
async fn navigate_steps_months_with_clamping() {
    let response = get(
        build_test_app(test_state()),
        "/api/v1/timeline/navigate?view=month&date=2025-01-31&direction=next",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "month");
    assert_eq!(json["date"], "2025-02-28");

    let response = get(
        build_test_app(test_state()),
        "/api/v1/timeline/navigate?view=week&date=2025-06-04&direction=previous",
    )
    .await;
    assert_eq!(body_json(response).await["date"], "2025-05-28");
}

#[tokio::test]
async fn invalid_date_query_is_rejected() {
    let response = get(
        build_test_app(test_state()),
        "/api/v1/timeline/day?date=June-first",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dates_outside_supported_years_are_rejected() {
    for uri in [
        "/api/v1/timeline/week?date=%2B262142-12-31",
        "/api/v1/timeline/month?date=%2B262142-12-31",
        "/api/v1/timeline/week?date=-262143-01-01",
        "/api/v1/timeline/day?date=0000-06-01",
        "/api/v1/timeline/navigate?view=day&date=%2B262142-12-31&direction=next",
        "/api/v1/timeline/navigate?view=month&date=9999-12-15&direction=next",
    ] {
        let response = get(build_test_app(test_state()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    let response = get(
        build_test_app(test_state()),
        "/api/v1/timeline/week?date=9999-12-31",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

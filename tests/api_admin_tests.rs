// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin mutations through the HTTP API.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{send, ADMIN};

#[tokio::test]
async fn test_delete_workout_requires_confirmation() {
    let (app, state) = common::create_test_app();
    let workout = state.recorder.record("2", "Correr").await.unwrap();
    common::login_as(&state, ADMIN).await;

    let uri = format!("/api/workouts/{}", workout.id);
    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
    assert_eq!(body["error"], "confirmation_required");
    assert_eq!(state.store.workouts().await.len(), 1);

    let (status, _) = send(&app, "DELETE", &format!("{uri}?confirm=true"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(state.store.workouts().await.is_empty());

    let (status, _) = send(&app, "DELETE", &format!("{uri}?confirm=true"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_user_cascades_workouts() {
    let (app, state) = common::create_test_app();
    state.recorder.record("3", "Crossfit").await.unwrap();
    state.recorder.record("3", "Pádel").await.unwrap();
    state.recorder.record("4", "Correr").await.unwrap();
    common::login_as(&state, ADMIN).await;

    let (status, body) = send(&app, "DELETE", "/api/admin/users/3?confirm=true", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removedWorkouts"], 2);
    assert!(state.store.get_user("3").await.is_none());

    let remaining = state.store.workouts().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, "4");

    let (_, ranking) = send(&app, "GET", "/api/ranking", None).await;
    assert_eq!(ranking["entries"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_admin_cannot_be_removed() {
    let (app, state) = common::create_test_app();
    common::login_as(&state, ADMIN).await;

    let (status, _) = send(&app, "DELETE", "/api/admin/users/6?confirm=true", None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(state.store.get_user("6").await.is_some());
}

#[tokio::test]
async fn test_remove_user_without_confirmation() {
    let (app, state) = common::create_test_app();
    common::login_as(&state, ADMIN).await;

    let (status, _) = send(&app, "DELETE", "/api/admin/users/2", None).await;

    assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
    assert_eq!(state.store.users().await.len(), 9);
}

#[tokio::test]
async fn test_activity_edit_only_affects_new_workouts() {
    let (app, state) = common::create_test_app();
    let before = state.recorder.record("5", "Pádel").await.unwrap();
    common::login_as(&state, ADMIN).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/admin/activities/P%C3%A1del",
        Some(json!({ "points": 0.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"], 0.5);
    assert_eq!(body["color"], "bg-yellow-500");

    let after = state.recorder.record("5", "Pádel").await.unwrap();

    assert_eq!(before.points, 0.25);
    assert_eq!(after.points, 0.5);
    let stored = state.store.workouts().await;
    assert_eq!(stored[0].points, 0.25);
}

#[tokio::test]
async fn test_add_and_remove_activity() {
    let (app, state) = common::create_test_app();
    common::login_as(&state, ADMIN).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/activities",
        Some(json!({ "type": "Natación", "points": 1.0, "color": "bg-cyan-500" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], "Natación");

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/activities",
        Some(json!({ "type": "Natación", "points": 2.0, "color": "bg-cyan-500" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let workout = state.recorder.record("1", "Natación").await.unwrap();
    assert_eq!(workout.points, 1.0);

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/admin/activities/Nataci%C3%B3n?confirm=true",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(state.store.activity_configs().await.len(), 6);

    // The old workout keeps its label and points
    let (_, history) = send(&app, "GET", "/api/workouts?user=1", None).await;
    assert_eq!(history[0]["activityType"], "Natación");
    assert_eq!(history[0]["points"], 1.0);
    assert_eq!(history[0]["color"], "bg-slate-700");
}

#[tokio::test]
async fn test_invalid_activity_rejected() {
    let (app, state) = common::create_test_app();
    common::login_as(&state, ADMIN).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/activities",
        Some(json!({ "type": "Remo", "points": -1.0, "color": "bg-teal-500" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert_eq!(state.store.activity_configs().await.len(), 6);
}

#[tokio::test]
async fn test_new_user_default_password_and_login() {
    let (app, state) = common::create_test_app();
    common::login_as(&state, ADMIN).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/users",
        Some(json!({ "name": "Jose Maria" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "josemaria");
    assert_eq!(body["isAdmin"], false);

    let (status, _) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({ "username": "josemaria", "password": "123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/api/ranking", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let (app, state) = common::create_test_app();
    common::login_as(&state, ADMIN).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/users",
        Some(json!({ "name": "Juanmi" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(state.store.users().await.len(), 9);
}

#[tokio::test]
async fn test_update_password() {
    let (app, state) = common::create_test_app();
    common::login_as(&state, ADMIN).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/users/2/password",
        Some(json!({ "password": "nueva_clave" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({ "username": "adri", "password": "adri_2026" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({ "username": "adri", "password": "nueva_clave" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "2");
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin routes: activity table, roster and workout deletion.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ActivityConfig, UserProfile};
use crate::services::admin::{
    NewActivityRequest, NewUserRequest, UpdateActivityRequest, UpdatePasswordRequest,
};
use crate::AppState;

/// Admin routes (session + admin flag). Layers are applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts/{id}", delete(delete_workout))
        .route("/api/admin/activities", post(add_activity))
        .route(
            "/api/admin/activities/{activity_type}",
            put(update_activity).delete(remove_activity),
        )
        .route("/api/admin/users", post(add_user))
        .route("/api/admin/users/{id}/password", put(update_password))
        .route("/api/admin/users/{id}", delete(remove_user))
}

/// Destructive actions must be confirmed with `?confirm=true`.
#[derive(Deserialize)]
struct ConfirmQuery {
    #[serde(default)]
    confirm: bool,
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(q): Query<ConfirmQuery>,
) -> Result<StatusCode> {
    state.admin.delete_workout(&id, q.confirm).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── Activity Types ──────────────────────────────────────────

async fn add_activity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewActivityRequest>,
) -> Result<(StatusCode, Json<ActivityConfig>)> {
    let config = state.admin.add_activity(req).await?;
    Ok((StatusCode::CREATED, Json(config)))
}

async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_type): Path<String>,
    Json(req): Json<UpdateActivityRequest>,
) -> Result<Json<ActivityConfig>> {
    Ok(Json(state.admin.update_activity(&activity_type, req).await?))
}

async fn remove_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_type): Path<String>,
    Query(q): Query<ConfirmQuery>,
) -> Result<StatusCode> {
    state.admin.remove_activity(&activity_type, q.confirm).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── Roster ──────────────────────────────────────────────────

async fn add_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUserRequest>,
) -> Result<(StatusCode, Json<UserProfile>)> {
    let user = state.admin.add_user(req).await?;
    Ok((StatusCode::CREATED, Json(UserProfile::from(&user))))
}

async fn update_password(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<StatusCode> {
    state.admin.update_password(&id, req).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveUserResponse {
    pub removed_workouts: usize,
}

async fn remove_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(q): Query<ConfirmQuery>,
) -> Result<Json<RemoveUserResponse>> {
    let removed_workouts = state.admin.remove_user(&id, q.confirm).await?;
    Ok(Json(RemoveUserResponse { removed_workouts }))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for logged-in users.

use crate::error::Result;
use crate::middleware::SessionUser;
use crate::models::{ActivityConfig, DailyQuota, LeaderboardEntry};
use crate::services::dashboard::{self, DashboardSummary, HistoryEntry};
use crate::services::eligibility::daily_quota;
use crate::services::ranking::{leaderboard, points_baseline};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require a session).
/// The session middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/ranking", get(get_ranking))
        .route("/api/activities", get(get_activities))
        .route("/api/workouts", get(get_workouts).post(create_workout))
        .route("/api/workouts/quota", get(get_quota))
}

// ─── Dashboard ───────────────────────────────────────────────

async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionUser>,
) -> Result<Json<DashboardSummary>> {
    let now = chrono::Utc::now();
    let zone = state.config.day_zone;

    let summary = state
        .store
        .read(|s| dashboard::dashboard(s, &session.user_id, now, zone))
        .await?;
    Ok(Json(summary))
}

// ─── Ranking ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub entries: Vec<LeaderboardEntry>,
    /// Denominator used for `ratio` (never 0)
    pub max_points: f64,
}

async fn get_ranking(State(state): State<Arc<AppState>>) -> Json<RankingResponse> {
    let entries = state
        .store
        .read(|s| leaderboard(&s.users, &s.workouts))
        .await;
    let max_points = points_baseline(entries.first().map(|e| e.total_points));

    Json(RankingResponse {
        entries,
        max_points,
    })
}

// ─── Activity Types ──────────────────────────────────────────

async fn get_activities(State(state): State<Arc<AppState>>) -> Json<Vec<ActivityConfig>> {
    Json(state.store.activity_configs().await)
}

// ─── Workouts ────────────────────────────────────────────────

#[derive(Deserialize)]
struct HistoryQuery {
    /// Filter by user id
    user: Option<String>,
}

async fn get_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Json<Vec<HistoryEntry>> {
    let zone = state.config.day_zone;
    let entries = state
        .store
        .read(|s| dashboard::history(s, params.user.as_deref(), zone))
        .await;

    tracing::debug!(user = ?params.user, count = entries.len(), "Fetched workout history");
    Json(entries)
}

/// Workout submission form.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    activity_type: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutResponse {
    pub id: String,
    pub activity_type: String,
    pub points: f64,
    pub timestamp: String,
    /// Quota after this workout
    pub quota: DailyQuota,
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionUser>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<CreateWorkoutResponse>)> {
    let workout = state
        .recorder
        .record(&session.user_id, req.activity_type.trim())
        .await?;

    let zone = state.config.day_zone;
    let quota = state
        .store
        .read(|s| daily_quota(&session.user_id, &s.workouts, workout.timestamp, zone))
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreateWorkoutResponse {
            id: workout.id,
            activity_type: workout.activity_type.to_string(),
            points: workout.points,
            timestamp: zone.format_rfc3339(workout.timestamp),
            quota,
        }),
    ))
}

async fn get_quota(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionUser>,
) -> Json<DailyQuota> {
    let now = chrono::Utc::now();
    let zone = state.config.day_zone;
    let quota = state
        .store
        .read(|s| daily_quota(&session.user_id, &s.workouts, now, zone))
        .await;
    Json(quota)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read models for the dashboard and the workout history.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::Collections;
use crate::error::{AppError, Result};
use crate::models::{ActivityCatalog, DailyQuota, UserProfile, Workout};
use crate::services::eligibility::daily_quota;
use crate::services::ranking::{rank_of, tally_by_user};
use crate::time_utils::DayZone;

/// Number of recent workouts shown on the dashboard.
const LATEST_WORKOUTS: usize = 5;

/// One workout row joined with its owner and current color.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub user_id: String,
    /// Owner's display name, if the user still exists
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub activity_type: String,
    pub color: String,
    pub points: f64,
    /// Local RFC3339 timestamp
    pub timestamp: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp_ms: i64,
}

/// Summary for the logged-in user.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user: UserProfile,
    pub total_points: f64,
    pub rank: u32,
    pub workout_count: u32,
    /// Distinct local calendar days with at least one workout
    pub active_days: u32,
    pub latest_workouts: Vec<HistoryEntry>,
    pub quota: DailyQuota,
}

/// Build the dashboard summary for one user.
pub fn dashboard(
    state: &Collections,
    user_id: &str,
    now: DateTime<Utc>,
    zone: DayZone,
) -> Result<DashboardSummary> {
    let user = state
        .find_user(user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let rank = rank_of(&state.users, &state.workouts, user_id).unwrap_or_default();
    let tally = tally_by_user(&state.workouts)
        .get(user_id)
        .copied()
        .unwrap_or_default();

    let own: Vec<&Workout> = state
        .workouts
        .iter()
        .filter(|w| w.user_id == user_id)
        .collect();
    let active_days = own
        .iter()
        .map(|w| zone.local_date(w.timestamp))
        .collect::<HashSet<_>>()
        .len() as u32;

    let latest_workouts = history(state, Some(user_id), zone)
        .into_iter()
        .take(LATEST_WORKOUTS)
        .collect();

    Ok(DashboardSummary {
        user: UserProfile::from(user),
        total_points: tally.total_points,
        rank,
        workout_count: tally.workout_count,
        active_days,
        latest_workouts,
        quota: daily_quota(user_id, &state.workouts, now, zone),
    })
}

/// All workouts newest first, optionally limited to one user.
pub fn history(
    state: &Collections,
    user_filter: Option<&str>,
    zone: DayZone,
) -> Vec<HistoryEntry> {
    let catalog = ActivityCatalog::new(&state.activity_configs);

    let mut selected: Vec<&Workout> = state
        .workouts
        .iter()
        .filter(|w| user_filter.is_none_or(|id| w.user_id == id))
        .collect();
    selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    selected
        .into_iter()
        .map(|w| {
            let owner = state.find_user(&w.user_id);
            HistoryEntry {
                id: w.id.clone(),
                user_id: w.user_id.clone(),
                user_name: owner.map(|u| u.name.clone()),
                user_avatar: owner.map(|u| u.avatar.clone()),
                activity_type: w.activity_type.to_string(),
                color: catalog.color_for(w.activity_type.as_str()).to_string(),
                points: w.points,
                timestamp: zone.format_rfc3339(w.timestamp),
                timestamp_ms: w.timestamp.timestamp_millis(),
            }
        })
        .collect()
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived statistics: per-user point tallies, leaderboard rows and quotas.
//!
//! Nothing here is persisted. Tallies are recomputed from the workout
//! collection on every request.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{User, UserProfile, Workout};

/// Running totals for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointsTally {
    /// Sum of workout points
    pub total_points: f64,
    /// Number of workouts
    pub workout_count: u32,
}

impl PointsTally {
    pub fn add(&mut self, workout: &Workout) {
        self.total_points += workout.points;
        self.workout_count += 1;
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: u32,
    pub user: UserProfile,
    pub total_points: f64,
    pub workout_count: u32,
    /// `total_points` relative to the leader, for bar widths
    pub ratio: f64,
}

impl LeaderboardEntry {
    pub fn new(rank: u32, user: &User, tally: PointsTally, baseline: f64) -> Self {
        Self {
            rank,
            user: UserProfile::from(user),
            total_points: tally.total_points,
            workout_count: tally.workout_count,
            ratio: tally.total_points / baseline,
        }
    }
}

/// How many workouts a user has left today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuota {
    pub used: u32,
    pub limit: u32,
    pub remaining: u32,
    pub can_add: bool,
}

impl DailyQuota {
    pub fn new(used: usize, limit: usize) -> Self {
        let used = used as u32;
        let limit = limit as u32;
        Self {
            used,
            limit,
            remaining: limit.saturating_sub(used),
            can_add: used < limit,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily workout cap.

use chrono::{DateTime, Utc};

use crate::models::{DailyQuota, Workout};
use crate::time_utils::DayZone;

/// Maximum workouts a user may log per local calendar day.
pub const DAILY_WORKOUT_LIMIT: usize = 2;

/// Number of workouts the user logged on the local calendar day of `now`.
pub fn workouts_today(
    user_id: &str,
    workouts: &[Workout],
    now: DateTime<Utc>,
    zone: DayZone,
) -> usize {
    workouts
        .iter()
        .filter(|w| w.user_id == user_id && zone.same_day(w.timestamp, now))
        .count()
}

/// Whether one more workout may be recorded for the user right now.
pub fn can_add_workout(
    user_id: &str,
    workouts: &[Workout],
    now: DateTime<Utc>,
    zone: DayZone,
) -> bool {
    workouts_today(user_id, workouts, now, zone) < DAILY_WORKOUT_LIMIT
}

pub fn daily_quota(
    user_id: &str,
    workouts: &[Workout],
    now: DateTime<Utc>,
    zone: DayZone,
) -> DailyQuota {
    DailyQuota::new(
        workouts_today(user_id, workouts, now, zone),
        DAILY_WORKOUT_LIMIT,
    )
}

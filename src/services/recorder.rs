// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout recording service.
//!
//! Handles the submission workflow:
//! 1. Check the user exists
//! 2. Enforce the daily cap against the current workout list
//! 3. Resolve the activity type in the configuration table
//! 4. Snapshot the configured points into a new workout and append it
//!
//! All four steps run inside one store transaction, so two rapid
//! submissions cannot both pass the cap check.

use chrono::{DateTime, Utc};

use crate::db::LocalStore;
use crate::error::{AppError, Result};
use crate::models::{ActivityCatalog, Workout};
use crate::services::eligibility::{can_add_workout, DAILY_WORKOUT_LIMIT};
use crate::time_utils::DayZone;

/// Records workouts for squad members.
#[derive(Clone)]
pub struct WorkoutRecorder {
    store: LocalStore,
    zone: DayZone,
}

impl WorkoutRecorder {
    pub fn new(store: LocalStore, zone: DayZone) -> Self {
        Self { store, zone }
    }

    /// Record a workout submitted now.
    pub async fn record(&self, user_id: &str, activity_type: &str) -> Result<Workout> {
        self.record_at(user_id, activity_type, Utc::now()).await
    }

    /// Record a workout submitted at `now`.
    pub async fn record_at(
        &self,
        user_id: &str,
        activity_type: &str,
        now: DateTime<Utc>,
    ) -> Result<Workout> {
        let zone = self.zone;

        let result = self
            .store
            .transact(|state| {
                if state.find_user(user_id).is_none() {
                    return Err(AppError::NotFound(format!("User {} not found", user_id)));
                }

                if !can_add_workout(user_id, &state.workouts, now, zone) {
                    return Err(AppError::DailyLimitReached {
                        limit: DAILY_WORKOUT_LIMIT,
                    });
                }

                let config = ActivityCatalog::new(&state.activity_configs)
                    .resolve(activity_type)
                    .ok_or_else(|| AppError::ActivityConfigNotFound(activity_type.to_string()))?;

                let workout = Workout::from_config(user_id, config, now);
                state.workouts.push(workout.clone());
                Ok(workout)
            })
            .await;

        match &result {
            Ok(workout) => tracing::info!(
                user_id,
                workout_id = %workout.id,
                activity_type,
                points = workout.points,
                "Workout recorded"
            ),
            Err(AppError::DailyLimitReached { .. }) => {
                tracing::info!(user_id, activity_type, "Daily workout limit reached")
            }
            Err(e) => tracing::warn!(user_id, activity_type, error = %e, "Workout rejected"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn recorder() -> (WorkoutRecorder, LocalStore) {
        let store = LocalStore::in_memory();
        (WorkoutRecorder::new(store.clone(), DayZone::UTC), store)
    }

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_record_snapshots_points_and_time() {
        let (recorder, store) = recorder();
        let now = morning();

        let workout = recorder.record_at("1", "Pádel", now).await.unwrap();

        assert_eq!(workout.user_id, "1");
        assert_eq!(workout.activity_type.as_str(), "Pádel");
        assert_eq!(workout.points, 0.25);
        assert_eq!(workout.timestamp, now);
        assert_eq!(store.workouts().await, vec![workout]);
    }

    #[tokio::test]
    async fn test_third_workout_same_day_rejected() {
        let (recorder, store) = recorder();
        let now = morning();

        recorder.record_at("1", "Crossfit", now).await.unwrap();
        recorder
            .record_at("1", "Pádel", now + Duration::hours(2))
            .await
            .unwrap();

        let third = recorder
            .record_at("1", "Correr", now + Duration::hours(4))
            .await;
        assert!(matches!(third, Err(AppError::DailyLimitReached { limit: 2 })));
        assert_eq!(store.workouts().await.len(), 2);

        // Next day is fine again
        recorder
            .record_at("1", "Correr", now + Duration::days(1))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_activity_type_aborts() {
        let (recorder, store) = recorder();

        let result = recorder.record_at("1", "Yoga", morning()).await;

        assert!(matches!(result, Err(AppError::ActivityConfigNotFound(t)) if t == "Yoga"));
        assert!(store.workouts().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let (recorder, _) = recorder();
        let result = recorder.record_at("nobody", "Crossfit", morning()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_concurrent_submissions_respect_cap() {
        let (recorder, store) = recorder();
        let now = morning();

        let mut handles = vec![];
        for _ in 0..6 {
            let recorder = recorder.clone();
            handles.push(tokio::spawn(async move {
                recorder.record_at("1", "Crossfit", now).await
            }));
        }

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, DAILY_WORKOUT_LIMIT);
        assert_eq!(store.workouts().await.len(), DAILY_WORKOUT_LIMIT);
    }

    #[tokio::test]
    async fn test_summer_midnight_resets_cap() {
        let store = LocalStore::in_memory();
        let madrid: DayZone = "Europe/Madrid".parse().unwrap();
        let recorder = WorkoutRecorder::new(store.clone(), madrid);

        // 18:00 and 19:00 CEST on July 1
        let evening = Utc.with_ymd_and_hms(2026, 7, 1, 16, 0, 0).unwrap();
        recorder.record_at("1", "Crossfit", evening).await.unwrap();
        recorder
            .record_at("1", "Correr", evening + Duration::hours(1))
            .await
            .unwrap();

        // 00:30 CEST on July 2, still July 1 at the winter offset
        let after_midnight = Utc.with_ymd_and_hms(2026, 7, 1, 22, 30, 0).unwrap();
        recorder
            .record_at("1", "Pádel", after_midnight)
            .await
            .unwrap();

        assert_eq!(store.workouts().await.len(), 3);
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model: one logged activity event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ActivityConfig, ActivityType};

/// Logged workout stored under the workouts key.
///
/// Records are never mutated after creation; `points` is the value of the
/// activity configuration at the moment the workout was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Activity label at submission time
    pub activity_type: ActivityType,
    /// Points snapshot
    pub points: f64,
    /// Submission instant (Unix milliseconds on disk)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Workout {
    /// Build a new workout from the matching configuration entry.
    pub fn from_config(user_id: &str, config: &ActivityConfig, at: DateTime<Utc>) -> Self {
        Self {
            id: new_record_id(),
            user_id: user_id.to_string(),
            activity_type: config.activity_type.clone(),
            points: config.points,
            timestamp: at,
        }
    }
}

/// Fresh identifier for users and workouts.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_is_epoch_millis() {
        let raw = r#"{"id":"k3j2h1","userId":"1","activityType":"Crossfit","points":1.0,"timestamp":1767225600123}"#;
        let workout: Workout = serde_json::from_str(raw).unwrap();

        assert_eq!(workout.timestamp.timestamp_millis(), 1_767_225_600_123);
        assert_eq!(workout.activity_type.as_str(), "Crossfit");

        let back: Workout = serde_json::from_str(&serde_json::to_string(&workout).unwrap()).unwrap();
        assert_eq!(back, workout);
    }

    #[test]
    fn test_from_config_snapshots_points() {
        let mut config = ActivityConfig {
            activity_type: ActivityType::new("Crossfit"),
            points: 1.0,
            color: "bg-orange-500".to_string(),
        };
        let at = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
        let workout = Workout::from_config("1", &config, at);

        config.points = 2.0;

        assert_eq!(workout.points, 1.0);
        assert_eq!(workout.user_id, "1");
        assert_eq!(workout.timestamp, at);
    }

    #[test]
    fn test_record_ids_are_unique() {
        assert_ne!(new_record_id(), new_record_id());
    }
}

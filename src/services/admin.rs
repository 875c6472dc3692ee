// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin mutations over the activity table, the roster and workouts.
//!
//! Destructive operations take an explicit `confirmed` flag; without it they
//! fail with [`AppError::ConfirmationRequired`] and leave state unchanged.

use serde::Deserialize;
use validator::Validate;

use crate::db::LocalStore;
use crate::error::{AppError, Result};
use crate::models::user::{avatar_url, DEFAULT_PASSWORD};
use crate::models::workout::new_record_id;
use crate::models::{ActivityCatalog, ActivityConfig, ActivityType, User, Workout};

/// Request payload for adding an activity type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewActivityRequest {
    #[serde(rename = "type")]
    #[validate(length(
        min = 1,
        max = 40,
        message = "Activity type must be between 1 and 40 characters"
    ))]
    pub activity_type: String,

    #[validate(range(min = 0.0, max = 100.0, message = "Points must be between 0 and 100"))]
    pub points: f64,

    #[validate(length(min = 1, max = 40))]
    pub color: String,
}

/// Request payload for editing an activity type.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActivityRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "Points must be between 0 and 100"))]
    pub points: Option<f64>,

    #[validate(length(min = 1, max = 40))]
    pub color: Option<String>,
}

/// Request payload for adding a squad member.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUserRequest {
    #[validate(length(min = 1, max = 60, message = "Name must be between 1 and 60 characters"))]
    pub name: String,

    #[validate(length(max = 128))]
    pub password: Option<String>,
}

/// Request payload for a password change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Admin operations over the shared store.
#[derive(Clone)]
pub struct AdminService {
    store: LocalStore,
}

impl AdminService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    // ─── Activity Types ──────────────────────────────────────────

    pub async fn add_activity(&self, req: NewActivityRequest) -> Result<ActivityConfig> {
        req.validate()?;
        let label = req.activity_type.trim().to_string();
        if label.is_empty() {
            return Err(AppError::BadRequest("Activity type is blank".to_string()));
        }

        let config = ActivityConfig {
            activity_type: ActivityType::new(label),
            points: req.points,
            color: req.color,
        };

        self.store
            .transact(|state| {
                if ActivityCatalog::new(&state.activity_configs)
                    .contains(config.activity_type.as_str())
                {
                    return Err(AppError::Conflict(format!(
                        "Activity type '{}' already exists",
                        config.activity_type
                    )));
                }
                state.activity_configs.push(config.clone());
                Ok(())
            })
            .await?;

        tracing::info!(
            activity_type = %config.activity_type,
            points = config.points,
            "Activity type added"
        );
        Ok(config)
    }

    /// Change points and/or color. Only future workouts see the new points.
    pub async fn update_activity(
        &self,
        activity_type: &str,
        req: UpdateActivityRequest,
    ) -> Result<ActivityConfig> {
        req.validate()?;

        let updated = self
            .store
            .transact(|state| {
                let config = state
                    .activity_configs
                    .iter_mut()
                    .find(|c| c.activity_type.as_str() == activity_type)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Activity type '{}'", activity_type))
                    })?;

                if let Some(points) = req.points {
                    config.points = points;
                }
                if let Some(color) = req.color {
                    config.color = color;
                }
                Ok(config.clone())
            })
            .await?;

        tracing::info!(
            activity_type,
            points = updated.points,
            "Activity type updated"
        );
        Ok(updated)
    }

    /// Remove an activity type. Past workouts keep their label and points.
    pub async fn remove_activity(&self, activity_type: &str, confirmed: bool) -> Result<()> {
        require_confirmation(confirmed, "remove activity type")?;

        self.store
            .transact(|state| {
                let before = state.activity_configs.len();
                state
                    .activity_configs
                    .retain(|c| c.activity_type.as_str() != activity_type);
                if state.activity_configs.len() == before {
                    return Err(AppError::NotFound(format!(
                        "Activity type '{}'",
                        activity_type
                    )));
                }
                Ok(())
            })
            .await?;

        tracing::info!(activity_type, "Activity type removed");
        Ok(())
    }

    // ─── Roster ──────────────────────────────────────────────────

    pub async fn add_user(&self, req: NewUserRequest) -> Result<User> {
        req.validate()?;

        let name = req.name.trim().to_string();
        let username = username_from_name(&name);
        if username.is_empty() {
            return Err(AppError::BadRequest("Name is blank".to_string()));
        }

        let password = req
            .password
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

        let user = User {
            id: new_record_id(),
            avatar: avatar_url(&name),
            username,
            password: Some(password),
            name,
            is_admin: false,
        };

        self.store
            .transact(|state| {
                if state.users.iter().any(|u| u.username == user.username) {
                    return Err(AppError::Conflict(format!(
                        "Username '{}' already taken",
                        user.username
                    )));
                }
                state.users.push(user.clone());
                Ok(())
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User added");
        Ok(user)
    }

    pub async fn update_password(&self, user_id: &str, req: UpdatePasswordRequest) -> Result<()> {
        req.validate()?;

        self.store
            .transact(|state| {
                let user = state
                    .users
                    .iter_mut()
                    .find(|u| u.id == user_id)
                    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
                user.password = Some(req.password);

                // Keep the session marker in sync with the roster
                if let Some(session) = state.session.as_mut().filter(|s| s.id == user_id) {
                    session.password = user.password.clone();
                }
                Ok(())
            })
            .await?;

        tracing::info!(user_id, "Password updated");
        Ok(())
    }

    /// Remove a non-admin user together with their workouts.
    ///
    /// Returns the number of workouts removed.
    pub async fn remove_user(&self, user_id: &str, confirmed: bool) -> Result<usize> {
        require_confirmation(confirmed, "remove user")?;

        let removed_workouts = self
            .store
            .transact(|state| {
                let user = state
                    .find_user(user_id)
                    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
                if user.is_admin {
                    return Err(AppError::Forbidden(
                        "Admin users cannot be removed".to_string(),
                    ));
                }

                state.users.retain(|u| u.id != user_id);

                let before = state.workouts.len();
                state.workouts.retain(|w| w.user_id != user_id);

                if state.session.as_ref().is_some_and(|s| s.id == user_id) {
                    state.session = None;
                }
                Ok(before - state.workouts.len())
            })
            .await?;

        tracing::info!(user_id, removed_workouts, "User removed");
        Ok(removed_workouts)
    }

    // ─── Workouts ────────────────────────────────────────────────

    pub async fn delete_workout(&self, workout_id: &str, confirmed: bool) -> Result<Workout> {
        require_confirmation(confirmed, "delete workout")?;

        let removed = self
            .store
            .transact(|state| {
                let idx = state
                    .workouts
                    .iter()
                    .position(|w| w.id == workout_id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Workout {} not found", workout_id))
                    })?;
                Ok(state.workouts.remove(idx))
            })
            .await?;

        tracing::info!(workout_id, user_id = %removed.user_id, "Workout deleted");
        Ok(removed)
    }
}

/// Login name derived from a display name: lowercased, whitespace removed.
pub fn username_from_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn require_confirmation(confirmed: bool, action: &str) -> Result<()> {
    if confirmed {
        Ok(())
    } else {
        Err(AppError::ConfirmationRequired(format!(
            "Pass confirm=true to {}",
            action
        )))
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, logout and session restore.
//!
//! Credentials are compared in plaintext against the roster. This mirrors a
//! shared-device squad dashboard and is not a security boundary.

use crate::db::LocalStore;
use crate::error::{AppError, Result};
use crate::models::User;

/// Check credentials and persist the session marker.
pub async fn login(store: &LocalStore, username: &str, password: &str) -> Result<User> {
    let user = store
        .transact(|state| {
            let user = state
                .users
                .iter()
                .find(|u| u.username == username)
                .cloned()
                .ok_or(AppError::InvalidCredentials)?;

            if user.effective_password() != password {
                return Err(AppError::InvalidCredentials);
            }

            state.session = Some(user.clone());
            Ok(user)
        })
        .await;

    match &user {
        Ok(u) => tracing::info!(user_id = %u.id, username, "Logged in"),
        Err(_) => tracing::info!(username, "Login failed"),
    }
    user
}

/// Remove the session marker.
pub async fn logout(store: &LocalStore) -> Result<()> {
    store
        .transact(|state| {
            if let Some(user) = state.session.take() {
                tracing::info!(user_id = %user.id, "Logged out");
            }
            Ok(())
        })
        .await
}

/// Resolve the stored session against the current roster.
///
/// Returns the roster's record (so admin edits show up without a new login).
/// A marker pointing at a removed user is cleared.
pub async fn current_user(store: &LocalStore) -> Result<Option<User>> {
    let (marker, resolved) = store
        .read(|state| {
            let marker = state.session.as_ref().map(|s| s.id.clone());
            let resolved = marker.as_deref().and_then(|id| state.find_user(id).cloned());
            (marker, resolved)
        })
        .await;

    if let (Some(stale_id), None) = (&marker, &resolved) {
        tracing::warn!(user_id = %stale_id, "Session user no longer exists, clearing session");
        store
            .transact(|state| {
                if state.session.as_ref().is_some_and(|s| &s.id == stale_id) {
                    state.session = None;
                }
                Ok(())
            })
            .await?;
    }

    Ok(resolved)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session middleware.
//!
//! The dashboard has a single active session persisted in the store, so
//! there is no token to verify: a request is authenticated when the stored
//! session marker resolves to a user on the roster.

use crate::error::AppError;
use crate::services::auth::current_user;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated user resolved from the session marker.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: String,
    pub is_admin: bool,
}

/// Middleware that requires an active session.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = current_user(&state.store)
        .await?
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(SessionUser {
        user_id: user.id,
        is_admin: user.is_admin,
    });

    Ok(next.run(request).await)
}

/// Middleware that requires the session user to be an admin.
///
/// Must run after [`require_session`].
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let session = request
        .extensions()
        .get::<SessionUser>()
        .ok_or(AppError::Unauthorized)?;

    if !session.is_admin {
        tracing::warn!(user_id = %session.user_id, "Non-admin attempted admin operation");
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}

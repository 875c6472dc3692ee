// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, logout and session restore routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::UserProfile;
use crate::services::auth;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

/// Login form.
#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserProfile>> {
    let user = auth::login(&state.store, &req.username, &req.password).await?;
    Ok(Json(UserProfile::from(&user)))
}

async fn logout(State(state): State<Arc<AppState>>) -> Result<StatusCode> {
    auth::logout(&state.store).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Restore the persisted session, 204 when nobody is logged in.
async fn session(State(state): State<Arc<AppState>>) -> Result<Response> {
    Ok(match auth::current_user(&state.store).await? {
        Some(user) => Json(UserProfile::from(&user)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use squad_tracker::config::Config;
use squad_tracker::db::LocalStore;
use squad_tracker::routes::create_router;
use squad_tracker::services::auth;
use squad_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Admin account from the seed roster.
#[allow(dead_code)]
pub const ADMIN: (&str, &str) = ("franju", "franju_g26");

/// Regular account from the seed roster (id "1").
#[allow(dead_code)]
pub const MEMBER: (&str, &str) = ("juanmi", "guerrero_master");

/// Create a test app with a seeded in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default(), LocalStore::in_memory()));
    (create_router(state.clone()), state)
}

/// Log in directly through the store, bypassing HTTP.
#[allow(dead_code)]
pub async fn login_as(state: &AppState, account: (&str, &str)) {
    auth::login(&state.store, account.0, account.1)
        .await
        .expect("seed credentials should be valid");
}

/// Send a request and decode the JSON body (Null when empty).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Squad-Tracker dashboard server
//!
//! Serves the local dashboard API over the squad's persisted workouts,
//! activity table and roster.

use squad_tracker::{
    config::Config,
    db::{FileKvStore, LocalStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        day_zone = %config.day_zone,
        "Starting Squad-Tracker"
    );

    // Open the local store (seeds missing collections)
    let kv = FileKvStore::open(&config.data_dir)?;
    let store = LocalStore::open(Arc::new(kv))?;

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store));

    // Build router
    let app = squad_tracker::routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("squad_tracker=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}

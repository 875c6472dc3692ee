// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Squad-Tracker: points and leaderboard for a small training group
//!
//! This crate provides the local dashboard API: members log workouts,
//! each activity type is worth a configured number of points, and the
//! leaderboard ranks members by accumulated points.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::LocalStore;
use services::{AdminService, WorkoutRecorder};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: LocalStore,
    pub recorder: WorkoutRecorder,
    pub admin: AdminService,
}

impl AppState {
    /// Wire the services around one store.
    pub fn new(config: Config, store: LocalStore) -> Self {
        let recorder = WorkoutRecorder::new(store.clone(), config.day_zone);
        let admin = AdminService::new(store.clone());
        Self {
            config,
            store,
            recorder,
            admin,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod eligibility;
pub mod ranking;
pub mod recorder;

pub use admin::AdminService;
pub use recorder::WorkoutRecorder;

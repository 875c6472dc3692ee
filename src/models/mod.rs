// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod seed;
pub mod stats;
pub mod user;
pub mod workout;

pub use activity::{ActivityCatalog, ActivityConfig, ActivityType};
pub use stats::{DailyQuota, LeaderboardEntry, PointsTally};
pub use user::{User, UserProfile};
pub use workout::Workout;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (local key-value store).

pub mod kv;
pub mod local;

pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use local::{Collections, LocalStore};

/// Storage keys as constants.
///
/// These match the keys the browser dashboard used, so an exported
/// localStorage dump can be dropped into the data directory as-is.
pub mod keys {
    pub const USERS: &str = "g26_users";
    pub const WORKOUTS: &str = "g26_workouts";
    pub const ACTIVITY_CONFIGS: &str = "g26_activity_configs";
    /// Session marker: the logged-in user record
    pub const CURRENT_USER: &str = "g26_current_user";
}

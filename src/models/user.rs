// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Password accepted for users that have none stored.
pub const DEFAULT_PASSWORD: &str = "123";

/// Squad member stored under the users key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Login name (unique)
    pub username: String,
    /// Plaintext credential; absent means [`DEFAULT_PASSWORD`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Display name
    pub name: String,
    /// Whether the user may use admin operations
    pub is_admin: bool,
    /// Avatar image URL
    pub avatar: String,
}

impl User {
    /// The password this user logs in with.
    pub fn effective_password(&self) -> &str {
        match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PASSWORD,
        }
    }
}

/// Avatar URL derived from a seed string.
pub fn avatar_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/200", seed)
}

/// Public view of a user (no credential).
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub name: String,
    pub is_admin: bool,
    pub avatar: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            is_admin: user.is_admin,
            avatar: user.avatar.clone(),
        }
    }
}

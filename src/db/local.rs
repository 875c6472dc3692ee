// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed store over a [`KvStore`] backend.
//!
//! Provides:
//! - Users (roster)
//! - Workouts (logged events, insertion order)
//! - Activity configs (points table)
//! - Session marker (logged-in user)
//!
//! The whole state is loaded once and kept in memory. Mutations run as
//! transactions: the closure edits a copy, changed keys are written to the
//! backend, and only then is the copy committed.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task;

use crate::db::keys;
use crate::db::kv::{KvStore, MemoryKvStore};
use crate::error::{AppError, Result};
use crate::models::seed::{initial_activity_configs, initial_users};
use crate::models::{ActivityConfig, User, Workout};

/// Everything the dashboard persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub users: Vec<User>,
    pub workouts: Vec<Workout>,
    pub activity_configs: Vec<ActivityConfig>,
    pub session: Option<User>,
}

impl Collections {
    /// Seed state used on first start.
    pub fn seeded() -> Self {
        Self {
            users: initial_users(),
            workouts: Vec::new(),
            activity_configs: initial_activity_configs(),
            session: None,
        }
    }

    pub fn find_user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }
}

/// Shared handle to the persisted state.
#[derive(Clone)]
pub struct LocalStore {
    kv: Arc<dyn KvStore>,
    state: Arc<RwLock<Collections>>,
}

impl LocalStore {
    /// Load all collections from the backend.
    ///
    /// Missing users and activity configs are seeded, missing workouts start
    /// empty, and the seeded values are written back so the backend always
    /// holds what is being served.
    pub fn open(kv: Arc<dyn KvStore>) -> Result<Self> {
        let seed = Collections::seeded();
        let mut state = Collections::default();

        state.users = load_or_init(kv.as_ref(), keys::USERS, seed.users)?;
        state.workouts = load_or_init(kv.as_ref(), keys::WORKOUTS, seed.workouts)?;
        state.activity_configs =
            load_or_init(kv.as_ref(), keys::ACTIVITY_CONFIGS, seed.activity_configs)?;
        state.session = load(kv.as_ref(), keys::CURRENT_USER)?;

        tracing::info!(
            users = state.users.len(),
            workouts = state.workouts.len(),
            activity_configs = state.activity_configs.len(),
            session = state.session.is_some(),
            "Store loaded"
        );

        Ok(Self {
            kv,
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Seeded store backed by memory (offline tests).
    pub fn in_memory() -> Self {
        Self::with_state(Arc::new(MemoryKvStore::new()), Collections::seeded())
    }

    /// Store with explicit initial state; nothing is written until the
    /// first transaction.
    pub fn with_state(kv: Arc<dyn KvStore>, state: Collections) -> Self {
        Self {
            kv,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Run a read-only computation against the current state.
    pub async fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> R {
        let guard = self.state.read().await;
        f(&guard)
    }

    /// Clone of the current state.
    pub async fn snapshot(&self) -> Collections {
        self.read(Collections::clone).await
    }

    /// Apply a mutation atomically.
    ///
    /// The write lock is held for the whole closure, so checks made inside
    /// it cannot be invalidated by another transaction. If the closure or
    /// persistence fails, in-memory state is left untouched and keys already
    /// written are restored.
    pub async fn transact<R>(&self, f: impl FnOnce(&mut Collections) -> Result<R>) -> Result<R> {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let out = f(&mut next)?;

        let writes = changed_keys(&guard, &next)?;
        if !writes.is_empty() {
            let kv = self.kv.clone();
            task::spawn_blocking(move || apply_writes(kv.as_ref(), &writes))
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Persist task failed: {}", e)))??;
        }

        *guard = next;
        Ok(out)
    }

    // ─── Convenience Reads ───────────────────────────────────────

    pub async fn users(&self) -> Vec<User> {
        self.read(|s| s.users.clone()).await
    }

    pub async fn workouts(&self) -> Vec<Workout> {
        self.read(|s| s.workouts.clone()).await
    }

    pub async fn activity_configs(&self) -> Vec<ActivityConfig> {
        self.read(|s| s.activity_configs.clone()).await
    }

    pub async fn get_user(&self, user_id: &str) -> Option<User> {
        self.read(|s| s.find_user(user_id).cloned()).await
    }

    /// Raw session marker as stored.
    pub async fn session(&self) -> Option<User> {
        self.read(|s| s.session.clone()).await
    }
}

/// One key to rewrite, with the value to restore if a later write fails.
/// `None` means the key is absent.
struct KeyWrite {
    key: &'static str,
    before: Option<String>,
    after: Option<String>,
}

/// Serialized writes for every collection that differs.
///
/// Workouts come before users so a user is never removed on disk while
/// their workouts remain.
fn changed_keys(before: &Collections, after: &Collections) -> Result<Vec<KeyWrite>> {
    let mut writes = Vec::new();

    if before.workouts != after.workouts {
        writes.push(KeyWrite {
            key: keys::WORKOUTS,
            before: Some(encode(keys::WORKOUTS, &before.workouts)?),
            after: Some(encode(keys::WORKOUTS, &after.workouts)?),
        });
    }
    if before.activity_configs != after.activity_configs {
        writes.push(KeyWrite {
            key: keys::ACTIVITY_CONFIGS,
            before: Some(encode(keys::ACTIVITY_CONFIGS, &before.activity_configs)?),
            after: Some(encode(keys::ACTIVITY_CONFIGS, &after.activity_configs)?),
        });
    }
    if before.users != after.users {
        writes.push(KeyWrite {
            key: keys::USERS,
            before: Some(encode(keys::USERS, &before.users)?),
            after: Some(encode(keys::USERS, &after.users)?),
        });
    }
    if before.session != after.session {
        writes.push(KeyWrite {
            key: keys::CURRENT_USER,
            before: before
                .session
                .as_ref()
                .map(|u| encode(keys::CURRENT_USER, u))
                .transpose()?,
            after: after
                .session
                .as_ref()
                .map(|u| encode(keys::CURRENT_USER, u))
                .transpose()?,
        });
    }
    Ok(writes)
}

/// Write all keys in order, undoing earlier writes if one fails.
fn apply_writes(kv: &dyn KvStore, writes: &[KeyWrite]) -> Result<()> {
    for (i, write) in writes.iter().enumerate() {
        if let Err(e) = put(kv, write.key, write.after.as_deref()) {
            tracing::error!(key = write.key, error = %e, "Persist failed, restoring earlier keys");
            for done in writes[..i].iter().rev() {
                if let Err(undo) = put(kv, done.key, done.before.as_deref()) {
                    tracing::error!(key = done.key, error = %undo, "Failed to restore key");
                }
            }
            return Err(e);
        }
    }
    Ok(())
}

fn put(kv: &dyn KvStore, key: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(raw) => kv.set(key, raw),
        None => kv.remove(key),
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode {}: {}", key, e)))
}

fn load<T: DeserializeOwned>(kv: &dyn KvStore, key: &str) -> Result<Option<T>> {
    kv.get(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(key, error = %e, "Stored value is not valid JSON");
                AppError::Storage(format!("Corrupt value under {}: {}", key, e))
            })
        })
        .transpose()
}

fn load_or_init<T: Serialize + DeserializeOwned>(
    kv: &dyn KvStore,
    key: &str,
    default: T,
) -> Result<T> {
    match load(kv, key)? {
        Some(value) => Ok(value),
        None => {
            tracing::info!(key, "Key missing, writing initial value");
            store(kv, key, &default)?;
            Ok(default)
        }
    }
}

fn store<T: Serialize + ?Sized>(kv: &dyn KvStore, key: &str, value: &T) -> Result<()> {
    kv.set(key, &encode(key, value)?)
}

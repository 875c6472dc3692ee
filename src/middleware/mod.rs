// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (session, admin gate).

pub mod auth;

pub use auth::{require_admin, require_session, SessionUser};

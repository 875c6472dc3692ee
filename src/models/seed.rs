// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roster and activity table written on first start.

use crate::models::user::avatar_url;
use crate::models::{ActivityConfig, ActivityType, User};

/// (id, username, password, display name, admin)
const SEED_USERS: &[(&str, &str, &str, &str, bool)] = &[
    ("1", "juanmi", "guerrero_master", "Juanmi", false),
    ("2", "adri", "adri_2026", "Adri", false),
    ("3", "joseluis", "jose_luis_26", "Joseluis", false),
    ("4", "josevi", "jose_vi_26", "Josevi", false),
    ("5", "pedro", "pedro_g26", "Pedro", false),
    ("6", "franju", "franju_g26", "Franju", true),
    ("7", "sergio", "sergio_g26", "Sergio", false),
    ("8", "joseca", "jose_ca_26", "Joseca", false),
    ("9", "juanma", "juanma_g26", "Juanma", false),
];

const SEED_ACTIVITIES: &[(&str, f64, &str)] = &[
    ("Crossfit", 1.0, "bg-orange-500"),
    ("Correr", 1.0, "bg-blue-500"),
    ("Musculación", 1.0, "bg-purple-500"),
    ("Bicicleta", 1.0, "bg-green-500"),
    ("Pádel", 0.25, "bg-yellow-500"),
    ("Baloncesto", 0.25, "bg-red-500"),
];

pub fn initial_users() -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|&(id, username, password, name, is_admin)| User {
            id: id.to_string(),
            username: username.to_string(),
            password: Some(password.to_string()),
            name: name.to_string(),
            is_admin,
            avatar: avatar_url(username),
        })
        .collect()
}

pub fn initial_activity_configs() -> Vec<ActivityConfig> {
    SEED_ACTIVITIES
        .iter()
        .map(|&(label, points, color)| ActivityConfig {
            activity_type: ActivityType::new(label),
            points,
            color: color.to_string(),
        })
        .collect()
}

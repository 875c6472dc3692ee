// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::time_utils::DayZone;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted key-value files
    pub data_dir: PathBuf,
    /// Address the dashboard API binds to (local only by default)
    pub bind_addr: String,
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Zone defining the calendar-day boundary for the daily cap and for
    /// displayed dates
    pub day_zone: DayZone,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            day_zone: DayZone::UTC,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let day_zone = match env::var("SQUAD_TZ") {
            Ok(raw) => parse_day_zone(&raw)?,
            Err(_) => DayZone::Local,
        };

        Ok(Self {
            data_dir: env::var("SQUAD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            bind_addr: env::var("SQUAD_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            day_zone,
        })
    }
}

/// Parse `local`, an IANA zone such as `Europe/Madrid`, or an offset such
/// as `+01:00`.
fn parse_day_zone(raw: &str) -> Result<DayZone, ConfigError> {
    raw.parse::<DayZone>()
        .map_err(|_| ConfigError::Invalid("SQUAD_TZ", raw.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity type configuration: point values and display colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of an activity type (e.g. "Crossfit").
///
/// Labels are free-form so admins can add categories, but a label is only
/// accepted for new workouts once it resolves in an [`ActivityCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityType(String);

impl ActivityType {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Points and display color for one activity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityConfig {
    /// Activity label (unique within the table)
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Points awarded per workout of this type
    pub points: f64,
    /// Display color class
    pub color: String,
}

/// Read-only view over the activity configuration table.
pub struct ActivityCatalog<'a> {
    configs: &'a [ActivityConfig],
}

impl<'a> ActivityCatalog<'a> {
    pub fn new(configs: &'a [ActivityConfig]) -> Self {
        Self { configs }
    }

    /// Find the configuration for a label.
    pub fn resolve(&self, label: &str) -> Option<&'a ActivityConfig> {
        self.configs
            .iter()
            .find(|c| c.activity_type.as_str() == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.resolve(label).is_some()
    }

    /// Color for a label, falling back when the type was removed.
    pub fn color_for(&self, label: &str) -> &'a str {
        self.resolve(label)
            .map(|c| c.color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// Color shown for workouts whose activity type no longer exists.
pub const FALLBACK_COLOR: &str = "bg-slate-700";

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day handling and timestamp formatting.
//!
//! Workouts store UTC instants. Day-based rules and displayed dates both use
//! the dashboard's [`DayZone`], resolved per instant so daylight saving
//! changes move the local midnight with them.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Time zone that defines the dashboard's calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DayZone {
    /// The host's local zone, including its DST rules
    #[default]
    Local,
    /// IANA zone such as `Europe/Madrid`
    Named(Tz),
    /// Fixed offset with no DST
    Fixed(FixedOffset),
}

impl DayZone {
    pub const UTC: DayZone = DayZone::Named(Tz::UTC);

    /// Local calendar date of a UTC instant.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            DayZone::Local => local_date(instant, &Local),
            DayZone::Named(tz) => local_date(instant, tz),
            DayZone::Fixed(offset) => local_date(instant, offset),
        }
    }

    /// True when both instants fall on the same local calendar date.
    pub fn same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.local_date(a) == self.local_date(b)
    }

    /// RFC3339 rendering with the offset in effect at that instant.
    pub fn format_rfc3339(&self, instant: DateTime<Utc>) -> String {
        let local = match self {
            DayZone::Local => instant.with_timezone(&Local).fixed_offset(),
            DayZone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
            DayZone::Fixed(offset) => instant.with_timezone(offset),
        };
        local.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl FromStr for DayZone {
    type Err = String;

    /// Accepts `local`, an IANA name or a fixed offset like `+01:00`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("local") {
            return Ok(DayZone::Local);
        }
        if let Ok(tz) = raw.parse::<Tz>() {
            return Ok(DayZone::Named(tz));
        }
        raw.parse::<FixedOffset>()
            .map(DayZone::Fixed)
            .map_err(|_| format!("unknown time zone '{}'", raw))
    }
}

impl fmt::Display for DayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayZone::Local => f.write_str("local"),
            DayZone::Named(tz) => f.write_str(tz.name()),
            DayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Local calendar date of a UTC instant in any zone.
pub fn local_date<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> NaiveDate {
    instant.with_timezone(zone).date_naive()
}

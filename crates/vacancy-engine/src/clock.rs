//! Clock-time handling — conversion between the `"HH:mm"` wire form and
//! minutes since midnight.
//!
//! Schedule sources carry times as zero-padded 24-hour `"HH:mm"` strings;
//! all interval arithmetic happens on the minute representation. Parsing is
//! strict: malformed strings fail fast with [`VacancyError::InvalidClockTime`]
//! so bad data surfaces at the ingestion boundary instead of silently
//! skewing availability results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, VacancyError};

/// Minutes in a day; valid [`ClockTime`] values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time on a 24-hour clock, stored as minutes since midnight.
///
/// Immutable value type. Serializes as the zero-padded `"HH:mm"` string used
/// by the schedule JSON; compares chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Construct from an hour/minute pair. Intended for compile-time
    /// constants; panics on out-of-range components.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60);
        ClockTime(hour * 60 + minute)
    }

    /// Construct from minutes since midnight.
    ///
    /// # Errors
    /// Returns `InvalidClockTime` for values outside `[0, 1439]`.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes < MINUTES_PER_DAY {
            Ok(ClockTime(minutes))
        } else {
            Err(VacancyError::InvalidClockTime(format!(
                "{} minutes is beyond a single day",
                minutes
            )))
        }
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

/// Parse a `"HH:mm"` string into minutes since midnight.
///
/// # Errors
/// Returns `InvalidClockTime` when the string has no colon, non-numeric
/// parts, or an hour/minute outside the 24-hour clock.
pub fn to_minutes(t: &str) -> Result<u16> {
    t.parse::<ClockTime>().map(ClockTime::minutes)
}

/// Format minutes since midnight as a zero-padded `"HH:mm"` string.
///
/// Only defined for inputs in `[0, 1439]`; callers clamp to the operating
/// window before formatting.
pub fn to_clock_time(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn parse_component(s: &str) -> Option<u16> {
    // Reject empty parts and anything u16::parse would be lenient about
    // (leading '+', unicode digits are already excluded by is_ascii_digit).
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for ClockTime {
    type Err = VacancyError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || VacancyError::InvalidClockTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(bad)?;
        let hour = parse_component(h).ok_or_else(bad)?;
        let minute = parse_component(m).ok_or_else(bad)?;
        if hour > 23 || minute > 59 {
            return Err(bad());
        }
        Ok(ClockTime(hour * 60 + minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Occupancy data model and per-(room, day) aggregation.
//!
//! A schedule source supplies [`RoomOccupancy`] records, possibly several
//! for the same (room, day) pair when timetables come from different
//! uploads. [`ScheduleIndex`] unions them by composite key so the interval
//! merger always sees one occupied list per room and day.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::VacancyError;

/// Days the campus operates. Fri/Sat/Sun are deliberately absent from the
/// roster; queries for them never arise from well-behaved callers.
///
/// Thursday is encoded as the 4-letter `Thur` everywhere (wire form,
/// display, parsing) — a fixed convention of the schedule sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thur,
}

impl DayOfWeek {
    /// All operating days, in week order.
    pub const ALL: [DayOfWeek; 4] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thur,
    ];

    /// Map a calendar weekday onto the operating roster.
    ///
    /// Returns `None` for Fri/Sat/Sun — substituting a weekday on
    /// off-roster days is the caller's decision, not the engine's.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(DayOfWeek::Mon),
            Weekday::Tue => Some(DayOfWeek::Tue),
            Weekday::Wed => Some(DayOfWeek::Wed),
            Weekday::Thu => Some(DayOfWeek::Thur),
            Weekday::Fri | Weekday::Sat | Weekday::Sun => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Mon",
            DayOfWeek::Tue => "Tue",
            DayOfWeek::Wed => "Wed",
            DayOfWeek::Thur => "Thur",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = VacancyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mon" => Ok(DayOfWeek::Mon),
            "Tue" => Ok(DayOfWeek::Tue),
            "Wed" => Ok(DayOfWeek::Wed),
            "Thur" => Ok(DayOfWeek::Thur),
            other => Err(VacancyError::InvalidDay(other.to_string())),
        }
    }
}

/// One occupied time interval. `start < end` for any slot that represents a
/// real booking; degenerate slots are dropped by the merger, not here.
///
/// Source metadata (subject, batch, ...) rides along in `meta` and is never
/// inspected by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(flatten, default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl TimeSlot {
    /// A bare slot with no source metadata.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        TimeSlot {
            start,
            end,
            meta: serde_json::Map::new(),
        }
    }
}

/// The occupied slots of one room on one day, as supplied by a single
/// schedule source. Records for the same (room, day) from different sources
/// are unioned by [`ScheduleIndex`], never assumed pre-merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomOccupancy {
    pub room: String,
    pub day: DayOfWeek,
    pub occupied: Vec<TimeSlot>,
}

/// The daily clock-time range within which availability is computed.
/// Occupied time outside the window is irrelevant; free slots never extend
/// beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Default for OperatingWindow {
    fn default() -> Self {
        OperatingWindow {
            start: ClockTime::hm(9, 0),
            end: ClockTime::hm(19, 30),
        }
    }
}

/// The JSON document shape produced by schedule sources:
/// `{ "lastUpdated": ..., "schedules": [...] }`. `last_updated` is opaque
/// provenance and plays no part in any computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<serde_json::Value>,
    pub schedules: Vec<RoomOccupancy>,
}

/// Occupancy records grouped by the composite (room, day) key.
///
/// Pure concatenation — duplicate and overlapping slots are left for the
/// interval merger to subsume.
#[derive(Debug, Default)]
pub struct ScheduleIndex {
    by_key: HashMap<(String, DayOfWeek), Vec<TimeSlot>>,
}

impl ScheduleIndex {
    /// Group a snapshot of occupancy records by (room, day).
    pub fn from_records(records: &[RoomOccupancy]) -> Self {
        let mut by_key: HashMap<(String, DayOfWeek), Vec<TimeSlot>> = HashMap::new();
        for record in records {
            by_key
                .entry((record.room.clone(), record.day))
                .or_default()
                .extend(record.occupied.iter().cloned());
        }
        ScheduleIndex { by_key }
    }

    /// The concatenated occupied slots for a (room, day), or an empty slice
    /// when no source mentions the pair — that room is free all day.
    pub fn occupied(&self, room: &str, day: DayOfWeek) -> &[TimeSlot] {
        self.by_key
            .get(&(room.to_string(), day))
            .map_or(&[], Vec::as_slice)
    }
}

//! Room availability queries over an occupancy snapshot.
//!
//! [`QueryEngine`] holds the injected deployment configuration — room
//! roster, operating window, campus time zone — and answers
//! "which rooms are free" queries against a per-call occupancy snapshot.
//! Every call recomputes from scratch; the engine keeps no state between
//! queries and is safe to share across threads.

use std::cmp::Ordering;

use chrono_tz::Tz;
use serde::Serialize;

use crate::clock::ClockTime;
use crate::freebusy;
use crate::now;
use crate::schedule::{DayOfWeek, OperatingWindow, RoomOccupancy, ScheduleIndex};

/// One free interval of one room on one day, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeRoomResult {
    pub room: String,
    pub day: DayOfWeek,
    pub free_from: ClockTime,
    pub free_till: ClockTime,
    pub duration_minutes: i64,
}

/// The query surface, configured once with the deployment's roster, window,
/// and campus time zone.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    roster: Vec<String>,
    window: OperatingWindow,
    timezone: Tz,
}

impl QueryEngine {
    pub fn new(roster: Vec<String>, window: OperatingWindow, timezone: Tz) -> Self {
        QueryEngine {
            roster,
            window,
            timezone,
        }
    }

    pub fn window(&self) -> OperatingWindow {
        self.window
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Find free rooms on `day`, optionally restricted to slots containing
    /// `target_time` (end-exclusive) and slots of at least
    /// `min_duration_minutes`.
    ///
    /// Iterates the roster, not the occupancy data: a roster room with no
    /// record for `day` shows up free for the whole window, and occupancy
    /// records for unknown rooms are ignored. Results are sorted by
    /// duration descending, ties by ascending numeric room id. An empty
    /// result is a valid answer, not an error.
    pub fn find_free_rooms(
        &self,
        occupancy: &[RoomOccupancy],
        day: DayOfWeek,
        target_time: Option<ClockTime>,
        min_duration_minutes: Option<i64>,
    ) -> Vec<FreeRoomResult> {
        let index = ScheduleIndex::from_records(occupancy);

        let mut results: Vec<FreeRoomResult> = Vec::new();
        for room in &self.roster {
            let occupied = index.occupied(room, day);
            for slot in freebusy::find_free_slots(occupied, self.window) {
                if let Some(min) = min_duration_minutes {
                    if slot.duration_minutes < min {
                        continue;
                    }
                }
                if let Some(t) = target_time {
                    // Containment is end-exclusive: a room freed until 14:00
                    // is not free AT 14:00.
                    if !(slot.start <= t && t < slot.end) {
                        continue;
                    }
                }
                results.push(FreeRoomResult {
                    room: room.clone(),
                    day,
                    free_from: slot.start,
                    free_till: slot.end,
                    duration_minutes: slot.duration_minutes,
                });
            }
        }

        results.sort_by(|a, b| {
            b.duration_minutes
                .cmp(&a.duration_minutes)
                .then_with(|| compare_rooms(&a.room, &b.room))
        });

        results
    }

    /// Rooms free at the campus's current day and time.
    ///
    /// Resolves "now" in the campus zone. Outside the 4-day operating
    /// roster (Fri/Sat/Sun) the answer is empty — substituting a weekday is
    /// the caller's job. No minimum-duration filter is applied.
    pub fn free_now(&self, occupancy: &[RoomOccupancy]) -> Vec<FreeRoomResult> {
        let (weekday, time) = now::campus_now(self.timezone);
        match DayOfWeek::from_weekday(weekday) {
            Some(day) => self.find_free_rooms(occupancy, day, Some(time), None),
            None => Vec::new(),
        }
    }
}

/// Ascending room order for duration ties.
///
/// Room ids are numeric strings in this deployment, so compare their
/// integer values ("99" sorts before "401"). Rosters with non-numeric ids
/// fall back to lexicographic order.
fn compare_rooms(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

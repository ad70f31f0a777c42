//! Merge occupied intervals and derive the complementary free slots.
//!
//! Sorts occupied slots by start time, merges overlapping or touching
//! intervals after clipping them to the operating window, then computes the
//! gaps between merged intervals. Merged occupied slots and derived free
//! slots together tile the window exactly.

use serde::Serialize;

use crate::clock::ClockTime;
use crate::schedule::{OperatingWindow, TimeSlot};

/// A free time slot within the operating window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: i64,
}

fn minutes_between(start: ClockTime, end: ClockTime) -> i64 {
    i64::from(end.minutes()) - i64::from(start.minutes())
}

/// Merge occupied slots for one room/day, clipped to the window.
///
/// Returns a list sorted ascending by start, mutually non-overlapping, with
/// touching intervals (`end == next start`) merged. Slots entirely outside
/// the window, and degenerate slots whose clipped `start >= end`, are
/// dropped as data-quality dropout. Empty input means the room is free all
/// day and yields an empty list.
///
/// Merged output carries no slot metadata — a merged interval has no single
/// source slot to inherit it from.
pub fn merge_occupied(slots: &[TimeSlot], window: OperatingWindow) -> Vec<TimeSlot> {
    // Clip to the window, discarding slots that become empty or inverted.
    let mut intervals: Vec<(ClockTime, ClockTime)> = slots
        .iter()
        .map(|s| (s.start.max(window.start), s.end.min(window.end)))
        .filter(|&(start, end)| start < end)
        .collect();

    // Sort by start time (then by end time for stability).
    intervals.sort();

    // Linear scan: extend the running interval while the next one starts at
    // or before its end.
    let mut merged: Vec<TimeSlot> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.end {
                last.end = last.end.max(end);
                continue;
            }
        }
        merged.push(TimeSlot::new(start, end));
    }

    merged
}

/// Derive free slots from an already-merged occupied list.
///
/// Walks the merged list with a cursor starting at `window.start`, emitting
/// a free slot for every gap before an occupied interval and a trailing one
/// up to `window.end`. The result is chronological and, together with the
/// input, tiles the window with no gaps or overlaps.
pub fn free_slots_from_merged(merged: &[TimeSlot], window: OperatingWindow) -> Vec<FreeSlot> {
    let mut free = Vec::new();
    let mut cursor = window.start;

    for slot in merged {
        if cursor < slot.start {
            free.push(FreeSlot {
                start: cursor,
                end: slot.start,
                duration_minutes: minutes_between(cursor, slot.start),
            });
        }
        cursor = cursor.max(slot.end);
    }

    // Trailing free slot after the last occupied interval.
    if cursor < window.end {
        free.push(FreeSlot {
            start: cursor,
            end: window.end,
            duration_minutes: minutes_between(cursor, window.end),
        });
    }

    free
}

/// Compute the free slots of one room/day from its raw occupied list.
///
/// Convenience for the common call path: merge, then invert against the
/// window. Occupied slots may arrive unordered and overlapping.
pub fn find_free_slots(occupied: &[TimeSlot], window: OperatingWindow) -> Vec<FreeSlot> {
    free_slots_from_merged(&merge_occupied(occupied, window), window)
}

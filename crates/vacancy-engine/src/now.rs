//! Current day and clock time in the campus time zone.
//!
//! The campus is a fixed physical place; "free now" must be answered in its
//! zone no matter where the querying process runs. The deterministic
//! projection is split out so tests can pin the instant.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::clock::ClockTime;

/// Project a UTC instant into the campus zone as (weekday, clock time).
pub fn campus_day_time(instant: DateTime<Utc>, tz: Tz) -> (Weekday, ClockTime) {
    let local = instant.with_timezone(&tz);
    let time = ClockTime::hm(local.hour() as u16, local.minute() as u16);
    (local.weekday(), time)
}

/// The current (weekday, clock time) at the campus.
pub fn campus_now(tz: Tz) -> (Weekday, ClockTime) {
    campus_day_time(Utc::now(), tz)
}

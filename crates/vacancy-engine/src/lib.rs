//! # vacancy-engine
//!
//! Room-vacancy computation for a campus with weekly occupancy schedules.
//!
//! Given a snapshot of per-room occupancy records (room, weekday, occupied
//! time slots), the engine merges overlapping occupied intervals, inverts
//! them against the campus operating window, and answers queries like
//! "which rooms are free on Tue at 10:00 for at least 90 minutes?".
//!
//! The engine is pure and stateless: no I/O, no shared mutable state. The
//! schedule source, room roster, and operating window are supplied by the
//! caller per query or at [`query::QueryEngine`] construction.
//!
//! ## Modules
//!
//! - [`clock`] — `"HH:mm"` ↔ minutes-since-midnight conversion
//! - [`schedule`] — occupancy data model and per-(room, day) aggregation
//! - [`freebusy`] — occupied-interval merging and free-slot derivation
//! - [`query`] — the public query surface (`find_free_rooms`, `free_now`)
//! - [`now`] — campus-local current day/time resolution
//! - [`error`] — error types

pub mod clock;
pub mod error;
pub mod freebusy;
pub mod now;
pub mod query;
pub mod schedule;

pub use clock::ClockTime;
pub use error::VacancyError;
pub use freebusy::{find_free_slots, FreeSlot};
pub use query::{FreeRoomResult, QueryEngine};
pub use schedule::{DayOfWeek, OperatingWindow, RoomOccupancy, ScheduleIndex, TimeSlot};

//! The pure scheduling core.
//!
//! Everything in this module is a deterministic function from (bookings,
//! configuration, clock) to derived structures. No I/O, no shared state, no
//! locks: each day's schedule is independent and may be computed in
//! parallel by callers that care to.
//!
//! The module is organized leaf-first:
//!
//! - [`grid`]: operating-hours resolution and fixed-interval slot generation
//! - [`occupancy`]: per-slot bay occupancy from a day's bookings
//! - [`availability`]: slot availability rules and the shared time axis
//! - [`conflict`]: assignment-time bay conflict checking
//! - [`aggregate`]: range enumeration and day-by-day schedule assembly
//!
//! The three public entry points re-exported here are the whole surface the
//! surrounding platform calls: [`generate_day_schedule`],
//! [`build_range_schedule`] and [`check_bay_conflict`].

pub mod aggregate;
pub mod availability;
pub mod conflict;
pub mod grid;
pub mod occupancy;

pub use aggregate::{build_range_schedule, generate_day_schedule, ScheduleContext};
pub use availability::{is_slot_available, unique_time_axis};
pub use conflict::check_bay_conflict;
pub use grid::DEFAULT_SLOT_INTERVAL_MINUTES;

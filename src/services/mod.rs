//! Service layer orchestrating repository fetches with the pure core.
//!
//! Services own the only I/O in the crate: they pull booking and bay
//! records through the repository traits, then delegate every decision to
//! the scheduler. They never mutate the underlying records.

pub mod assignment;
pub mod schedule_service;

pub use assignment::bay_available_for_assignment;
pub use schedule_service::ScheduleService;

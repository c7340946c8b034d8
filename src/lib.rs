//! # bayplan
//!
//! Appointment scheduling and service-bay allocation engine for multi-tenant
//! car service centers.
//!
//! This crate implements the one algorithmic subsystem of the surrounding
//! service-center platform: generating a time-slotted availability calendar
//! per center, tracking which physical bays are occupied at each moment, and
//! deciding at assignment time whether a bay can legally host a booking
//! without overlapping another active booking.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain data model — wall-clock time, bookings, bays,
//!   operating hours, closures, and the derived schedule types
//! - [`scheduler`]: The pure computation core — time-grid generation,
//!   occupancy, availability, conflict checking, and range aggregation
//! - [`db`]: Repository pattern for the booking/bay lookup capabilities the
//!   core consumes, with an in-memory backend for tests and local development
//! - [`services`]: Async orchestration combining repository fetches with the
//!   pure core
//! - [`config`]: Scheduling defaults (slot interval, fallback operating
//!   window) from TOML files or environment variables
//!
//! ## Design
//!
//! Every scheduler operation is a deterministic function from (bookings,
//! configuration, clock) to derived structures. The core performs no I/O and
//! keeps no state between calls; persistence, authentication, notifications
//! and the rest of the platform are external collaborators reached only
//! through the repository traits in [`db`].

pub mod config;

pub mod db;
pub mod models;

pub mod scheduler;

pub mod services;

pub use scheduler::{build_range_schedule, check_bay_conflict, generate_day_schedule};

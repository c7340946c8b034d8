//! Data-access module for the scheduling core.
//!
//! The core consumes exactly two capabilities from its environment: a
//! booking lookup and an active-bay lookup, both pre-filtered by service
//! center. This module defines them via the Repository pattern so storage
//! backends can be swapped without touching the scheduler:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Service Layer (services/) - Orchestration  │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  Repository Traits (repository.rs)          │
//! └───────────────────┬─────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────┐
//!     │  LocalRepository (in-memory) │
//!     └──────────────────────────────┘
//! ```
//!
//! The production document-store client lives in the surrounding platform
//! and is out of scope here; `LocalRepository` backs tests and local
//! development.

pub mod error;
pub mod local;
pub mod repository;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use local::LocalRepository;
pub use repository::{BayRepository, BookingRepository, DateRange, SchedulingRepository};

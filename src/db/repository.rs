//! Repository traits for the two data-fetch capabilities the core consumes.
//!
//! Records arrive already deserialized into the [`crate::models`] shapes;
//! the underlying storage format, network protocol and authentication are
//! the surrounding platform's concern. Every query is pre-scoped to one
//! service center, so the core never crosses a tenant boundary.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::models::{Bay, Booking};

/// Inclusive calendar date range for booking queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Whether `date` falls inside the range (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Booking lookup capability.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Fetch all bookings for a service center whose scheduled date falls
    /// inside `range`, optionally restricted to one bay.
    ///
    /// # Arguments
    /// * `center_id` - The owning service center
    /// * `range` - Inclusive date range to match `scheduled_date` against
    /// * `bay_id` - When set, only bookings assigned to this bay
    ///
    /// # Returns
    /// * `Ok(Vec<Booking>)` - Matching bookings, any status
    /// * `Err(RepositoryError)` - If the lookup fails
    async fn fetch_bookings(
        &self,
        center_id: &str,
        range: DateRange,
        bay_id: Option<&str>,
    ) -> RepositoryResult<Vec<Booking>>;
}

/// Bay lookup capability.
#[async_trait]
pub trait BayRepository: Send + Sync {
    /// Fetch the active bays of a service center.
    ///
    /// Inactive bays never participate in allocation and are filtered out
    /// by the implementation.
    async fn fetch_active_bays(&self, center_id: &str) -> RepositoryResult<Vec<Bay>>;
}

/// Combined capability used by the service layer as a single trait object.
pub trait SchedulingRepository: BookingRepository + BayRepository {}

impl<T: BookingRepository + BayRepository> SchedulingRepository for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
        );
        assert!(range.contains(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    }

    #[test]
    fn test_single_day_range() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let range = DateRange::single(date);
        assert!(range.contains(date));
        assert!(!range.contains(date.succ_opt().unwrap()));
    }
}

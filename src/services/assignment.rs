//! Assignment-time bay availability.
//!
//! Fetches the same-day bookings already holding a bay and runs the
//! conflict checker over them. The boolean computed here must be consumed
//! inside a single transactional write (check-then-assign) by the caller;
//! two concurrent assignment requests for the same bay/slot are otherwise
//! racy, and closing that race is the write path's job, not this crate's.

use anyhow::{Context, Result};

use crate::db::{DateRange, SchedulingRepository};
use crate::models::Booking;
use crate::scheduler::check_bay_conflict;

/// Decide whether `bay_id` can host `candidate`.
///
/// A candidate missing its scheduling data is reported available without a
/// repository round-trip (the checker fails open on incomplete data, and
/// there is no day to query). Repository failures propagate to the caller;
/// evaluation failures inside the checker deny the assignment.
pub async fn bay_available_for_assignment(
    repo: &dyn SchedulingRepository,
    bay_id: &str,
    candidate: &Booking,
) -> Result<bool> {
    let (Some(date), Some(_), Some(center_id)) = (
        candidate.scheduled_date,
        candidate.scheduled_time,
        candidate.service_center_id.as_deref(),
    ) else {
        log::warn!(
            "booking '{}' has incomplete scheduling data; allowing assignment to bay '{}'",
            candidate.id,
            bay_id
        );
        return Ok(true);
    };

    let same_day_bay_bookings = repo
        .fetch_bookings(center_id, DateRange::single(date), Some(bay_id))
        .await
        .with_context(|| {
            format!(
                "Failed to fetch bookings for bay '{}' on {}",
                bay_id, date
            )
        })?;

    Ok(check_bay_conflict(bay_id, candidate, &same_day_bay_bookings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalRepository;
    use crate::models::{BookingStatus, ClockTime};
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn booking(id: &str, h: u8, m: u8, duration: u32, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            service_center_id: Some("c1".to_string()),
            scheduled_date: Some(monday()),
            scheduled_time: Some(ClockTime::new(h, m).unwrap()),
            estimated_duration_minutes: Some(duration),
            status,
            bay_id: Some("bay-1".to_string()),
            technician_id: None,
        }
    }

    #[tokio::test]
    async fn test_overlap_denied_through_repository() {
        let repo = LocalRepository::new();
        repo.insert_booking(booking("x", 10, 0, 60, BookingStatus::Assigned));

        let candidate = booking("c", 10, 30, 30, BookingStatus::Pending);
        let available = bay_available_for_assignment(&repo, "bay-1", &candidate)
            .await
            .unwrap();
        assert!(!available);
    }

    #[tokio::test]
    async fn test_adjacent_allowed_through_repository() {
        let repo = LocalRepository::new();
        repo.insert_booking(booking("x", 10, 0, 60, BookingStatus::Assigned));

        let candidate = booking("c", 11, 0, 30, BookingStatus::Pending);
        let available = bay_available_for_assignment(&repo, "bay-1", &candidate)
            .await
            .unwrap();
        assert!(available);
    }

    #[tokio::test]
    async fn test_incomplete_candidate_skips_fetch_and_allows() {
        let repo = LocalRepository::new();
        repo.insert_booking(booking("x", 10, 0, 60, BookingStatus::Assigned));

        let mut candidate = booking("c", 10, 0, 60, BookingStatus::Pending);
        candidate.scheduled_time = None;
        let available = bay_available_for_assignment(&repo, "bay-1", &candidate)
            .await
            .unwrap();
        assert!(available);
    }
}

//! Assignment-time bay conflict checking.
//!
//! Invoked when an admin assigns a booking to a bay, independently of grid
//! rendering. Decides whether the candidate's window would overlap another
//! blocking booking already holding the same bay on the same day.
//!
//! Error posture, preserved exactly from the platform's observed behavior:
//! a candidate missing its own scheduling data passes the check (fail-open,
//! so malformed records never deadlock the assignment UI), while an
//! evaluation error over the existing bookings denies the assignment
//! (fail-closed, so an assignment is never silently allowed under an error
//! condition).
//!
//! Operational consequence of the fail-closed side: a blocking booking on a
//! bay with no scheduled time denies every new assignment to that bay until
//! the record is repaired, since the checker cannot position it. Teams
//! adopting this behavior should confirm both halves of the asymmetry
//! together — the fail-open half silently passes a malformed candidate, the
//! fail-closed half can wedge a bay on one malformed record.

use crate::models::{Booking, TimeInterval};

/// Internal evaluation failure while testing existing bookings.
#[derive(Debug, thiserror::Error)]
enum ConflictEvalError {
    #[error("booking '{0}' blocks bay but has no scheduled time")]
    UnplaceableBlocker(String),
}

/// Check whether `bay_id` can host `candidate`.
///
/// Returns `true` when the bay is free for the candidate's window. The
/// caller supplies `same_day_bay_bookings`, the other bookings already
/// fetched for this center, day and bay; the checker itself performs no
/// I/O.
///
/// The check-then-assign sequence must be wrapped in a single transactional
/// write by the caller; this function only computes the boolean.
pub fn check_bay_conflict(
    bay_id: &str,
    candidate: &Booking,
    same_day_bay_bookings: &[Booking],
) -> bool {
    // Fail open on incomplete candidate data.
    let (Some(date), Some(time), Some(_center)) = (
        candidate.scheduled_date,
        candidate.scheduled_time,
        candidate.service_center_id.as_ref(),
    ) else {
        return true;
    };

    let candidate_interval =
        TimeInterval::from_start_duration(time, candidate.duration_minutes());

    match evaluate(bay_id, candidate, date, candidate_interval, same_day_bay_bookings) {
        Ok(available) => available,
        Err(err) => {
            // Fail closed: never allow an assignment under an error.
            log::warn!("bay conflict evaluation failed for bay '{}': {}", bay_id, err);
            false
        }
    }
}

fn evaluate(
    bay_id: &str,
    candidate: &Booking,
    date: chrono::NaiveDate,
    candidate_interval: TimeInterval,
    others: &[Booking],
) -> Result<bool, ConflictEvalError> {
    for other in others {
        // A booking being re-assigned must not conflict with itself.
        if other.id == candidate.id {
            continue;
        }
        if !other.status.is_blocking() {
            continue;
        }
        if other.scheduled_date != Some(date) {
            continue;
        }
        if other.bay_id.as_deref() != Some(bay_id) {
            continue;
        }

        let other_interval = other
            .interval()
            .ok_or_else(|| ConflictEvalError::UnplaceableBlocker(other.id.clone()))?;

        if candidate_interval.overlaps(&other_interval) {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, ClockTime};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn booking(id: &str, h: u8, m: u8, duration: u32, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            service_center_id: Some("center-1".to_string()),
            scheduled_date: Some(date()),
            scheduled_time: Some(ClockTime::new(h, m).unwrap()),
            estimated_duration_minutes: Some(duration),
            status,
            bay_id: Some("B1".to_string()),
            technician_id: None,
        }
    }

    #[test]
    fn test_overlap_rejected() {
        // Existing booking 10:00+60 on B1; candidate 10:30+30 must be
        // rejected (10:30 < 11:00 and 11:00 > 10:30).
        let existing = vec![booking("x", 10, 0, 60, BookingStatus::Assigned)];
        let candidate = booking("c", 10, 30, 30, BookingStatus::Pending);
        assert!(!check_bay_conflict("B1", &candidate, &existing));
    }

    #[test]
    fn test_touching_boundary_accepted() {
        let existing = vec![booking("x", 10, 0, 60, BookingStatus::Assigned)];
        let candidate = booking("c", 11, 0, 30, BookingStatus::Pending);
        assert!(check_bay_conflict("B1", &candidate, &existing));
    }

    #[test]
    fn test_confirmed_blocks_even_unassigned_candidate_slot() {
        let existing = vec![booking("x", 10, 0, 60, BookingStatus::Confirmed)];
        let candidate = booking("c", 10, 0, 30, BookingStatus::Pending);
        assert!(!check_bay_conflict("B1", &candidate, &existing));
    }

    #[test]
    fn test_terminal_statuses_do_not_block() {
        let existing = vec![
            booking("x", 10, 0, 60, BookingStatus::Cancelled),
            booking("y", 10, 0, 60, BookingStatus::Declined),
            booking("z", 10, 0, 60, BookingStatus::Completed),
        ];
        let candidate = booking("c", 10, 0, 60, BookingStatus::Pending);
        assert!(check_bay_conflict("B1", &candidate, &existing));
    }

    #[test]
    fn test_self_conflict_excluded_on_reassignment() {
        let existing = vec![booking("c", 10, 0, 60, BookingStatus::Assigned)];
        let candidate = booking("c", 10, 0, 60, BookingStatus::Assigned);
        assert!(check_bay_conflict("B1", &candidate, &existing));
    }

    #[test]
    fn test_other_bay_ignored() {
        let mut other_bay = booking("x", 10, 0, 60, BookingStatus::Assigned);
        other_bay.bay_id = Some("B2".to_string());
        let candidate = booking("c", 10, 0, 60, BookingStatus::Pending);
        assert!(check_bay_conflict("B1", &candidate, &[other_bay]));
    }

    #[test]
    fn test_fail_open_on_missing_candidate_time() {
        let existing = vec![booking("x", 10, 0, 60, BookingStatus::Assigned)];
        let mut candidate = booking("c", 10, 0, 60, BookingStatus::Pending);
        candidate.scheduled_time = None;
        assert!(check_bay_conflict("B1", &candidate, &existing));
    }

    #[test]
    fn test_fail_open_on_missing_candidate_center() {
        let existing = vec![booking("x", 10, 0, 60, BookingStatus::Assigned)];
        let mut candidate = booking("c", 10, 0, 60, BookingStatus::Pending);
        candidate.service_center_id = None;
        assert!(check_bay_conflict("B1", &candidate, &existing));
    }

    #[test]
    fn test_fail_closed_on_unplaceable_blocker() {
        // A blocking booking on this bay with no scheduled time cannot be
        // positioned; the check must deny rather than silently allow.
        let mut broken = booking("x", 10, 0, 60, BookingStatus::Assigned);
        broken.scheduled_time = None;
        let candidate = booking("c", 14, 0, 30, BookingStatus::Pending);
        assert!(!check_bay_conflict("B1", &candidate, &[broken]));
    }

    #[test]
    fn test_default_duration_applied() {
        // Candidate without an estimate defaults to 60 minutes and so
        // reaches into the existing booking at 10:30.
        let existing = vec![booking("x", 10, 30, 30, BookingStatus::Assigned)];
        let mut candidate = booking("c", 10, 0, 0, BookingStatus::Pending);
        candidate.estimated_duration_minutes = None;
        assert!(!check_bay_conflict("B1", &candidate, &existing));
    }
}

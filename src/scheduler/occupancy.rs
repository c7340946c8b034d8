//! Per-slot bay occupancy.
//!
//! Given one day's bookings for a center, computes which bays are occupied
//! during a slot window and which booking statuses are present. Evaluation
//! is O(slots x bookings); at a single center's single-day volume that is
//! plenty, but bookings are pre-sorted by start time so slot evaluation can
//! early-exit.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{Booking, BookingStatus, TimeInterval};

/// Occupancy of one slot window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotOccupancy {
    /// Bays held by an active-status booking overlapping the window.
    pub occupied_bay_ids: BTreeSet<String>,
    /// Distinct statuses of the overlapping bookings, including bookings
    /// with no bay assigned yet.
    pub statuses_present: BTreeSet<BookingStatus>,
}

/// A day's bookings filtered to the active-status subset and sorted by
/// start time, ready for repeated slot queries.
#[derive(Debug, Clone)]
pub struct DayOccupancy<'a> {
    bookings: Vec<&'a Booking>,
}

impl<'a> DayOccupancy<'a> {
    /// Index the bookings scheduled on `date`.
    ///
    /// Bookings outside the active-status subset are excluded before any
    /// overlap testing, as are records whose interval cannot be computed
    /// (missing scheduled time); one malformed record must not blank the
    /// day's view.
    pub fn for_date(bookings: &'a [Booking], date: NaiveDate) -> Self {
        let mut day: Vec<&Booking> = bookings
            .iter()
            .filter(|b| b.occupies_on(date))
            .collect();
        day.sort_by_key(|b| b.scheduled_time);
        Self { bookings: day }
    }

    /// Number of bookings participating in occupancy for the day.
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Occupancy during `slot`.
    ///
    /// A booking occupies the slot iff its own half-open interval overlaps
    /// the slot window: `slot.start < booking.end && slot.end > booking.start`.
    /// Touching endpoints do not overlap. Bookings without a bay contribute
    /// to `statuses_present` only.
    pub fn slot_occupancy(&self, slot: TimeInterval) -> SlotOccupancy {
        let mut occupancy = SlotOccupancy::default();

        for booking in &self.bookings {
            let Some(interval) = booking.interval() else {
                continue;
            };
            // Sorted by start: once a booking starts at or after the slot's
            // end, no later booking can overlap it.
            if interval.start >= slot.end {
                break;
            }
            if interval.overlaps(&slot) {
                occupancy.statuses_present.insert(booking.status);
                if let Some(bay_id) = &booking.bay_id {
                    occupancy.occupied_bay_ids.insert(bay_id.clone());
                }
            }
        }

        occupancy
    }
}

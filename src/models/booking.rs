//! Booking and bay records as stored by the surrounding platform.
//!
//! These mirror the document-database shapes (camelCase field names) and
//! arrive already deserialized; the core never talks to the store itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::{ClockTime, TimeInterval};

/// Duration assumed when a booking carries no estimate.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Lifecycle status of a booking.
///
/// Bookings are created `Pending` and only move forward; `Completed`,
/// `Declined` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Assigned,
    InProgress,
    ReadyToCollect,
    InvoiceGenerated,
    Completed,
    Declined,
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking in this status physically holds its bay.
    ///
    /// Declined, cancelled and completed bookings never occupy; pending
    /// bookings have not committed to a bay yet.
    pub fn is_occupying(&self) -> bool {
        matches!(
            self,
            BookingStatus::Assigned
                | BookingStatus::InProgress
                | BookingStatus::ReadyToCollect
                | BookingStatus::InvoiceGenerated
                | BookingStatus::Confirmed
        )
    }

    /// Whether a booking in this status blocks new assignments to its bay.
    ///
    /// `Confirmed` bookings block even before they are physically assigned:
    /// they represent a committed intent to use the bay. Kept as a separate
    /// predicate from [`Self::is_occupying`] since the two sets are defined
    /// independently.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            BookingStatus::Assigned
                | BookingStatus::InProgress
                | BookingStatus::ReadyToCollect
                | BookingStatus::InvoiceGenerated
                | BookingStatus::Confirmed
        )
    }

    /// Whether this status ends the booking lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::Completed | BookingStatus::Declined | BookingStatus::Cancelled
        )
    }
}

/// An appointment booking owned by a single service center.
///
/// `bay_id` stays unset until an admin assigns the booking to a physical
/// bay; `technician_id` is display-only and never influences allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub service_center_id: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub scheduled_time: Option<ClockTime>,
    #[serde(default)]
    pub estimated_duration_minutes: Option<u32>,
    pub status: BookingStatus,
    #[serde(default)]
    pub bay_id: Option<String>,
    #[serde(default)]
    pub technician_id: Option<String>,
}

impl Booking {
    /// Effective duration, defaulting to one hour when no estimate is set.
    pub fn duration_minutes(&self) -> u32 {
        self.estimated_duration_minutes
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    /// The half-open window this booking occupies, or `None` when the
    /// scheduled time is missing.
    pub fn interval(&self) -> Option<TimeInterval> {
        let start = self.scheduled_time?;
        Some(TimeInterval::from_start_duration(
            start,
            self.duration_minutes(),
        ))
    }

    /// Whether this booking counts toward bay occupancy on `date`.
    pub fn occupies_on(&self, date: NaiveDate) -> bool {
        self.status.is_occupying()
            && self.scheduled_date == Some(date)
            && self.scheduled_time.is_some()
    }
}

/// A physical service bay. Only `active` bays participate in allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bay {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub service_center_id: String,
}

//! Derived schedule types.
//!
//! Everything here is recomputed on every query from the booking and bay
//! records plus the center configuration; nothing is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::booking::BookingStatus;
use super::hours::OperatingHours;
use super::time::ClockTime;

/// Range selector for [`crate::scheduler::build_range_schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleRange {
    /// Seven consecutive days starting at the given date.
    Week,
    /// Every calendar day of the given date's month.
    Month,
    /// The first day of each month of the given date's year, as a coarse
    /// per-month summary anchor.
    Year,
}

impl FromStr for ScheduleRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!("Unknown schedule range: {}", s)),
        }
    }
}

/// One 30-minute calendar window, the atomic unit of availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: ClockTime,
    pub date: NaiveDate,
    /// False on closed days and on fallback slots rendered outside the
    /// day's real hours.
    pub is_operating_hour: bool,
    pub is_available: bool,
    /// Bays held by an active-status booking during this window.
    pub occupied_bay_ids: BTreeSet<String>,
    /// Distinct statuses of the bookings overlapping this window, including
    /// bookings not yet assigned to a bay.
    pub statuses_present: BTreeSet<BookingStatus>,
}

impl TimeSlot {
    /// Number of distinct bays occupied in this slot.
    pub fn occupied_count(&self) -> usize {
        self.occupied_bay_ids.len()
    }
}

/// The rendered schedule for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_past: bool,
    /// The day's resolved operating hours; `None` when the day is closed
    /// (special closure or weekday marked closed).
    pub hours: Option<OperatingHours>,
    pub slots: Vec<TimeSlot>,
}

impl DaySchedule {
    /// Whether any slot of the day is available.
    pub fn has_availability(&self) -> bool {
        self.slots.iter().any(|s| s.is_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_from_str() {
        assert_eq!("week".parse::<ScheduleRange>().unwrap(), ScheduleRange::Week);
        assert_eq!("Month".parse::<ScheduleRange>().unwrap(), ScheduleRange::Month);
        assert_eq!("YEAR".parse::<ScheduleRange>().unwrap(), ScheduleRange::Year);
        assert!("fortnight".parse::<ScheduleRange>().is_err());
    }

    #[test]
    fn test_range_serde_snake_case() {
        let json = serde_json::to_string(&ScheduleRange::Week).unwrap();
        assert_eq!(json, "\"week\"");
    }
}

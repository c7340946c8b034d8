//! Time-grid generation.
//!
//! Converts a center's operating-hours configuration plus special closures
//! into the fixed-interval sequence of slot start times for a calendar day.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    is_specially_closed, ClockTime, OperatingHours, SpecialClosure, TimeInterval, WeeklyHours,
};

/// Platform-standard slot width. The generator accepts any positive interval
/// but every caller in the platform uses 30 minutes.
pub const DEFAULT_SLOT_INTERVAL_MINUTES: u32 = 30;

/// Resolve the operating hours for one calendar day.
///
/// Returns `None` when the day is closed, either by a special closure or by
/// the weekday being marked closed. A weekday with no configuration at all
/// resolves to `fallback` rather than failing.
pub fn resolve_day_hours(
    date: NaiveDate,
    weekly: &WeeklyHours,
    closures: &[SpecialClosure],
    fallback: OperatingHours,
) -> Option<OperatingHours> {
    if is_specially_closed(date, closures) {
        return None;
    }
    let hours = weekly.resolve(date.weekday(), fallback);
    if hours.is_closed {
        None
    } else {
        Some(hours)
    }
}

/// Generate slot start times across `window` at `interval_minutes` spacing.
///
/// Slots start at `window.start` and continue while `current < window.end`
/// (half-open: the slot beginning at the close time itself is never
/// generated). An inverted or zero-length window produces no slots, and a
/// zero interval is rejected outright so the generator can never loop
/// forever on bad configuration.
pub fn slot_times(window: TimeInterval, interval_minutes: u32) -> Vec<ClockTime> {
    if interval_minutes == 0 || window.is_empty() {
        return Vec::new();
    }

    let mut times = Vec::new();
    let mut current = window.start;
    while current < window.end {
        times.push(current);
        let next = current.add_minutes(interval_minutes);
        if next <= current {
            // add_minutes clamps at 24:00; stop once we can no longer advance.
            break;
        }
        current = next;
    }
    times
}

/// Slot start times for an open day's own hours.
pub fn operating_slot_times(hours: &OperatingHours, interval_minutes: u32) -> Vec<ClockTime> {
    if !hours.has_open_window() {
        return Vec::new();
    }
    slot_times(TimeInterval::new(hours.open, hours.close), interval_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8) -> ClockTime {
        ClockTime::new(h, m).unwrap()
    }

    #[test]
    fn test_slot_count_matches_window() {
        // 09:00-18:00 at 30 minutes: (540 / 30) = 18 slots.
        let hours = OperatingHours::open_between(t(9, 0), t(18, 0));
        let slots = operating_slot_times(&hours, 30);
        assert_eq!(slots.len(), 18);
        assert_eq!(slots[0], t(9, 0));
        assert_eq!(*slots.last().unwrap(), t(17, 30));
    }

    #[test]
    fn test_close_time_slot_never_generated() {
        let hours = OperatingHours::open_between(t(9, 0), t(10, 0));
        let slots = operating_slot_times(&hours, 30);
        assert_eq!(slots, vec![t(9, 0), t(9, 30)]);
    }

    #[test]
    fn test_partial_final_step() {
        // 09:00-10:15 yields 09:00, 09:30, 10:00 - length rounds down only
        // when the window is an exact multiple of the interval.
        let hours = OperatingHours::open_between(t(9, 0), t(10, 15));
        let slots = operating_slot_times(&hours, 30);
        assert_eq!(slots, vec![t(9, 0), t(9, 30), t(10, 0)]);
    }

    #[test]
    fn test_inverted_and_zero_length_windows() {
        let inverted = OperatingHours::open_between(t(18, 0), t(9, 0));
        assert!(operating_slot_times(&inverted, 30).is_empty());

        let zero = OperatingHours::open_between(t(9, 0), t(9, 0));
        assert!(operating_slot_times(&zero, 30).is_empty());
    }

    #[test]
    fn test_zero_interval_does_not_hang() {
        let window = TimeInterval::new(t(9, 0), t(18, 0));
        assert!(slot_times(window, 0).is_empty());
    }

    #[test]
    fn test_no_wrap_past_midnight() {
        let window = TimeInterval::new(t(23, 0), ClockTime::END_OF_DAY);
        let slots = slot_times(window, 30);
        assert_eq!(slots, vec![t(23, 0), t(23, 30)]);
    }

    #[test]
    fn test_resolve_day_hours() {
        let weekly = WeeklyHours::uniform(OperatingHours::open_between(t(9, 0), t(18, 0)));
        let fallback = OperatingHours::default_window();
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(); // Monday

        assert!(resolve_day_hours(date, &weekly, &[], fallback).is_some());

        let closures = vec![SpecialClosure {
            date,
            reason: None,
        }];
        assert!(resolve_day_hours(date, &weekly, &closures, fallback).is_none());

        let mut closed_mondays = weekly.clone();
        closed_mondays.set(chrono::Weekday::Mon, OperatingHours::closed());
        assert!(resolve_day_hours(date, &closed_mondays, &[], fallback).is_none());
    }

    #[test]
    fn test_missing_weekday_uses_fallback() {
        let weekly = WeeklyHours::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(); // Tuesday
        let resolved = resolve_day_hours(date, &weekly, &[], OperatingHours::default_window());
        assert_eq!(resolved, Some(OperatingHours::default_window()));
    }
}

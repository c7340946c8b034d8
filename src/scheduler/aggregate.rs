//! Range aggregation: date enumeration and day-by-day schedule assembly.
//!
//! Composes the grid, occupancy and availability components into the
//! [`DaySchedule`] structures consumed by the calendar UI.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::{
    Bay, Booking, DaySchedule, OperatingHours, ScheduleRange, SpecialClosure, TimeInterval,
    TimeSlot, WeeklyHours,
};

use super::availability::is_slot_available;
use super::grid::{resolve_day_hours, slot_times, DEFAULT_SLOT_INTERVAL_MINUTES};
use super::occupancy::DayOccupancy;

/// Immutable inputs for one schedule derivation.
///
/// The selected bay filter and the reference "today" arrive as explicit
/// parameters on every call rather than as shared state, so every
/// derivation is a pure function of its context.
#[derive(Debug, Clone)]
pub struct ScheduleContext<'a> {
    pub weekly_hours: &'a WeeklyHours,
    pub closures: &'a [SpecialClosure],
    pub bookings: &'a [Booking],
    pub bays: &'a [Bay],
    /// Reference date for the `is_today` / `is_past` flags.
    pub today: NaiveDate,
    bay_filter: Option<&'a str>,
    slot_interval_minutes: u32,
    default_hours: OperatingHours,
}

impl<'a> ScheduleContext<'a> {
    pub fn new(
        weekly_hours: &'a WeeklyHours,
        closures: &'a [SpecialClosure],
        bookings: &'a [Booking],
        bays: &'a [Bay],
        today: NaiveDate,
    ) -> Self {
        Self {
            weekly_hours,
            closures,
            bookings,
            bays,
            today,
            bay_filter: None,
            slot_interval_minutes: DEFAULT_SLOT_INTERVAL_MINUTES,
            default_hours: OperatingHours::default_window(),
        }
    }

    /// Restrict availability to a single bay.
    pub fn with_bay_filter(mut self, bay_id: &'a str) -> Self {
        self.bay_filter = Some(bay_id);
        self
    }

    /// Override the 30-minute slot interval.
    pub fn with_slot_interval(mut self, minutes: u32) -> Self {
        self.slot_interval_minutes = minutes;
        self
    }

    /// Override the window applied to weekdays with no configuration.
    pub fn with_default_hours(mut self, hours: OperatingHours) -> Self {
        self.default_hours = hours;
        self
    }

    /// Bays participating in allocation.
    pub fn active_bay_count(&self) -> usize {
        self.bays.iter().filter(|b| b.active).count()
    }

    fn resolve(&self, date: NaiveDate) -> Option<OperatingHours> {
        resolve_day_hours(date, self.weekly_hours, self.closures, self.default_hours)
    }
}

/// Enumerate the concrete dates covered by a range selection.
///
/// Week: 7 consecutive days from `start`. Month: every calendar day of
/// `start`'s month. Year: the first day of each of the 12 months of
/// `start`'s year, used as a coarse per-month summary anchor.
pub fn range_dates(range: ScheduleRange, start: NaiveDate) -> Vec<NaiveDate> {
    match range {
        ScheduleRange::Week => (0u64..7)
            .filter_map(|offset| start.checked_add_days(Days::new(offset)))
            .collect(),
        ScheduleRange::Month => {
            let mut dates = Vec::new();
            let mut current = start.with_day(1);
            while let Some(date) = current {
                if date.month() != start.month() || date.year() != start.year() {
                    break;
                }
                dates.push(date);
                current = date.succ_opt();
            }
            dates
        }
        ScheduleRange::Year => (1..=12)
            .filter_map(|month| NaiveDate::from_ymd_opt(start.year(), month, 1))
            .collect(),
    }
}

/// The overall operating window across the non-closed days of a range:
/// earliest open to latest close. `None` when every day is closed.
///
/// Closed-day fallback slots are generated against this window, so a
/// closed Sunday in a Sun-Mon span renders the same column extent as the
/// open Monday.
pub fn overall_window(dates: &[NaiveDate], ctx: &ScheduleContext<'_>) -> Option<TimeInterval> {
    let mut window: Option<TimeInterval> = None;
    for date in dates {
        let Some(hours) = ctx.resolve(*date) else {
            continue;
        };
        if !hours.has_open_window() {
            continue;
        }
        window = Some(match window {
            None => TimeInterval::new(hours.open, hours.close),
            Some(w) => TimeInterval::new(w.start.min(hours.open), w.end.max(hours.close)),
        });
    }
    window
}

/// Operating window across the weekly configuration itself, ignoring
/// specific dates. Used as the closed-day fallback for a standalone
/// single-day render, where the "range" contains no open day to borrow
/// hours from.
fn config_window(ctx: &ScheduleContext<'_>) -> Option<TimeInterval> {
    let weekdays = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    let mut window: Option<TimeInterval> = None;
    for weekday in weekdays {
        let hours = ctx.weekly_hours.resolve(weekday, ctx.default_hours);
        if !hours.has_open_window() {
            continue;
        }
        window = Some(match window {
            None => TimeInterval::new(hours.open, hours.close),
            Some(w) => TimeInterval::new(w.start.min(hours.open), w.end.max(hours.close)),
        });
    }
    window
}

fn build_day(
    date: NaiveDate,
    ctx: &ScheduleContext<'_>,
    fallback_window: Option<TimeInterval>,
) -> DaySchedule {
    let resolved = ctx.resolve(date);
    let occupancy = DayOccupancy::for_date(ctx.bookings, date);
    let total_active = ctx.active_bay_count();
    let interval = ctx.slot_interval_minutes;

    let (times, is_operating) = match &resolved {
        Some(hours) => (
            slot_times(TimeInterval::new(hours.open, hours.close), interval),
            true,
        ),
        None => (
            fallback_window
                .map(|w| slot_times(w, interval))
                .unwrap_or_default(),
            false,
        ),
    };

    let slots = times
        .into_iter()
        .map(|time| {
            let window = TimeInterval::from_start_duration(time, interval);
            let occ = occupancy.slot_occupancy(window);
            let available = is_operating
                && is_slot_available(&occ.occupied_bay_ids, total_active, ctx.bay_filter);
            TimeSlot {
                time,
                date,
                is_operating_hour: is_operating,
                is_available: available,
                occupied_bay_ids: occ.occupied_bay_ids,
                statuses_present: occ.statuses_present,
            }
        })
        .collect();

    DaySchedule {
        date,
        is_today: date == ctx.today,
        is_past: date < ctx.today,
        hours: resolved,
        slots,
    }
}

/// Build the schedule for one calendar day.
///
/// A closed day still renders a full row of slots over the weekly
/// configuration's overall window, each marked outside operating hours and
/// unavailable.
pub fn generate_day_schedule(date: NaiveDate, ctx: &ScheduleContext<'_>) -> DaySchedule {
    let fallback = overall_window(&[date], ctx).or_else(|| config_window(ctx));
    build_day(date, ctx, fallback)
}

/// Build the day-by-day schedule for a week, month or year range.
///
/// The overall open/close window is computed in a single pre-pass over the
/// range's resolved hours and then applied as the closed-day fallback,
/// yielding the same result as rebuilding closed days after a first full
/// pass.
pub fn build_range_schedule(
    range: ScheduleRange,
    start: NaiveDate,
    ctx: &ScheduleContext<'_>,
) -> Vec<DaySchedule> {
    let dates = range_dates(range, start);
    let fallback = overall_window(&dates, ctx);
    dates
        .into_iter()
        .map(|date| build_day(date, ctx, fallback))
        .collect()
}

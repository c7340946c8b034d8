//! Calendar rendering service.
//!
//! Fetches one center's bookings and active bays, then derives day or
//! range schedules via the scheduler core. Stateless per call; callers may
//! cache results by `(range, start_date)` if bookings have not changed.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::config::SchedulingConfig;
use crate::db::{DateRange, SchedulingRepository};
use crate::models::{DaySchedule, ScheduleRange, SpecialClosure, WeeklyHours};
use crate::scheduler::{self, ScheduleContext};

/// Schedule rendering over a repository-backed center.
#[derive(Clone)]
pub struct ScheduleService {
    repo: Arc<dyn SchedulingRepository>,
    config: SchedulingConfig,
}

impl ScheduleService {
    pub fn new(repo: Arc<dyn SchedulingRepository>, config: SchedulingConfig) -> Self {
        Self { repo, config }
    }

    /// Render the schedule for a single day.
    ///
    /// `today` is the reference date for the `is_today`/`is_past` flags and
    /// is passed in rather than read from the system clock, keeping the
    /// derivation reproducible.
    pub async fn day_schedule(
        &self,
        center_id: &str,
        date: NaiveDate,
        weekly_hours: &WeeklyHours,
        closures: &[SpecialClosure],
        today: NaiveDate,
    ) -> Result<DaySchedule> {
        let (bookings, bays) = self
            .fetch_inputs(center_id, DateRange::single(date))
            .await?;

        let ctx = ScheduleContext::new(weekly_hours, closures, &bookings, &bays, today)
            .with_slot_interval(self.config.slot_interval_minutes)
            .with_default_hours(self.config.default_hours());
        Ok(scheduler::generate_day_schedule(date, &ctx))
    }

    /// Render the day-by-day schedule for a week, month or year range,
    /// optionally filtered to a single bay.
    pub async fn range_schedule(
        &self,
        center_id: &str,
        range: ScheduleRange,
        start: NaiveDate,
        weekly_hours: &WeeklyHours,
        closures: &[SpecialClosure],
        today: NaiveDate,
        bay_filter: Option<&str>,
    ) -> Result<Vec<DaySchedule>> {
        let dates = scheduler::aggregate::range_dates(range, start);
        let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
            return Ok(Vec::new());
        };

        let (bookings, bays) = self
            .fetch_inputs(center_id, DateRange::new(*first, *last))
            .await?;

        let malformed = bookings
            .iter()
            .filter(|b| b.status.is_occupying() && b.scheduled_time.is_none())
            .count();
        if malformed > 0 {
            log::warn!(
                "center '{}': {} active booking(s) missing a scheduled time, excluded from occupancy",
                center_id,
                malformed
            );
        }

        let mut ctx = ScheduleContext::new(weekly_hours, closures, &bookings, &bays, today)
            .with_slot_interval(self.config.slot_interval_minutes)
            .with_default_hours(self.config.default_hours());
        if let Some(bay_id) = bay_filter {
            ctx = ctx.with_bay_filter(bay_id);
        }

        let days = scheduler::build_range_schedule(range, start, &ctx);
        log::debug!(
            "center '{}': rendered {} day(s) over {} booking(s), {} active bay(s)",
            center_id,
            days.len(),
            bookings.len(),
            bays.len()
        );
        Ok(days)
    }

    async fn fetch_inputs(
        &self,
        center_id: &str,
        range: DateRange,
    ) -> Result<(Vec<crate::models::Booking>, Vec<crate::models::Bay>)> {
        let bookings = self
            .repo
            .fetch_bookings(center_id, range, None)
            .await
            .with_context(|| format!("Failed to fetch bookings for center '{}'", center_id))?;
        let bays = self
            .repo
            .fetch_active_bays(center_id)
            .await
            .with_context(|| format!("Failed to fetch bays for center '{}'", center_id))?;
        Ok((bookings, bays))
    }
}

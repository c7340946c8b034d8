//! Slot availability rules.
//!
//! Combines the grid and occupancy index into the per-slot `is_available`
//! flag and derives the shared time axis used for multi-day rendering.

use std::collections::BTreeSet;

use crate::models::{ClockTime, DaySchedule, TimeInterval};

/// Decide whether a slot is available.
///
/// Filtering to all bays: at least one active bay must be free
/// (`occupied < total_active_bays`). Filtering to a specific bay: that bay
/// must not appear in the occupied set. Pure function, no I/O.
pub fn is_slot_available(
    occupied_bay_ids: &BTreeSet<String>,
    total_active_bays: usize,
    bay_filter: Option<&str>,
) -> bool {
    match bay_filter {
        Some(bay_id) => !occupied_bay_ids.contains(bay_id),
        None => occupied_bay_ids.len() < total_active_bays,
    }
}

/// Derive the unique time axis for multi-day rendering.
///
/// The union of slot times across the days, restricted to `window` (the
/// overall min-open/max-close across non-closed days in range) so that
/// closed days render a consistent column width without leaking times
/// outside any day's real hours. `None` restricts to nothing and yields an
/// empty axis.
pub fn unique_time_axis(days: &[DaySchedule], window: Option<TimeInterval>) -> Vec<ClockTime> {
    let Some(window) = window else {
        return Vec::new();
    };

    let times: BTreeSet<ClockTime> = days
        .iter()
        .flat_map(|day| day.slots.iter().map(|slot| slot.time))
        .filter(|time| *time >= window.start && *time < window.end)
        .collect();

    times.into_iter().collect()
}

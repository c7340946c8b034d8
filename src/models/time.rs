use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minutes in a full day; interval ends may land exactly here (24:00) but
/// never beyond, since no slot crosses midnight.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Error raised when an "HH:MM" wall-clock string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("invalid time format '{0}', expected HH:MM")]
    Format(String),
    #[error("time component out of range in '{0}'")]
    OutOfRange(String),
}

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Operating hours and booking times arrive as "HH:MM" strings from the
/// document store; this newtype keeps the arithmetic in plain minutes and
/// serializes back to the same string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// End-of-day sentinel (24:00), valid only as an interval end.
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    /// Create from an hour/minute pair.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeParseError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeParseError::OutOfRange(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self(hour as u16 * 60 + minute as u16))
    }

    /// Create from minutes since midnight, clamped to the end of day.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes.min(MINUTES_PER_DAY as u32) as u16)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23, or 24 for the end-of-day sentinel).
    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Advance by `minutes`, clamping at 24:00 rather than wrapping to the
    /// next calendar day.
    pub fn add_minutes(&self, minutes: u32) -> Self {
        Self::from_minutes(self.0 as u32 + minutes)
    }

    /// Minutes from `self` to `later`; zero when `later` is not after `self`.
    pub fn minutes_until(&self, later: ClockTime) -> u16 {
        later.0.saturating_sub(self.0)
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Parse an "HH:MM" string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hh, mm) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let hour: u8 = hh
            .trim()
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute: u8 = mm
            .trim()
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        Self::new(hour, minute).map_err(|_| TimeParseError::OutOfRange(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// Half-open `[start, end)` window within a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeInterval {
    /// Create a new interval. `end` at or before `start` yields a zero-length
    /// interval that overlaps nothing.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Interval starting at `start` and lasting `duration_minutes`, clamped
    /// to the end of the day.
    pub fn from_start_duration(start: ClockTime, duration_minutes: u32) -> Self {
        Self {
            start,
            end: start.add_minutes(duration_minutes),
        }
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.start.minutes_until(self.end)
    }

    /// True when the interval contains no time at all.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Half-open overlap test: `start1 < end2 && end1 > start2`.
    /// Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

//! Operating hours and closure configuration for a service center.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::time::ClockTime;

/// Opening window for one weekday.
///
/// Invariant (enforced upstream by the center-configuration screens):
/// when `is_closed` is false, `open < close`. The scheduler tolerates a
/// violated invariant by producing zero operating slots for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub is_closed: bool,
    pub open: ClockTime,
    pub close: ClockTime,
}

impl OperatingHours {
    /// An open window from `open` to `close`.
    pub fn open_between(open: ClockTime, close: ClockTime) -> Self {
        Self {
            is_closed: false,
            open,
            close,
        }
    }

    /// A closed day. The open/close values are retained for display but
    /// generate no operating slots.
    pub fn closed() -> Self {
        Self {
            is_closed: true,
            open: ClockTime::MIDNIGHT,
            close: ClockTime::MIDNIGHT,
        }
    }

    /// The platform-wide fallback window applied when a weekday has no
    /// configuration: open 09:00-18:00.
    pub fn default_window() -> Self {
        Self::open_between(
            ClockTime::new(9, 0).expect("09:00 is a valid time"),
            ClockTime::new(18, 0).expect("18:00 is a valid time"),
        )
    }

    /// Whether the window can yield any operating slot at all.
    pub fn has_open_window(&self) -> bool {
        !self.is_closed && self.open < self.close
    }
}

/// Per-weekday operating hours for one service center.
///
/// Any day left unset resolves to the 09:00-18:00 default rather than
/// failing, matching the fallback every call site in the surrounding
/// platform already applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyHours {
    pub monday: Option<OperatingHours>,
    pub tuesday: Option<OperatingHours>,
    pub wednesday: Option<OperatingHours>,
    pub thursday: Option<OperatingHours>,
    pub friday: Option<OperatingHours>,
    pub saturday: Option<OperatingHours>,
    pub sunday: Option<OperatingHours>,
}

impl WeeklyHours {
    /// Hours configured for `weekday`, if any.
    pub fn get(&self, weekday: Weekday) -> Option<OperatingHours> {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Set the hours for `weekday`.
    pub fn set(&mut self, weekday: Weekday, hours: OperatingHours) {
        let slot = match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = Some(hours);
    }

    /// Resolve the hours for `weekday`, falling back to `fallback` when the
    /// day has no configuration.
    pub fn resolve(&self, weekday: Weekday, fallback: OperatingHours) -> OperatingHours {
        self.get(weekday).unwrap_or(fallback)
    }

    /// The same hours every day of the week.
    pub fn uniform(hours: OperatingHours) -> Self {
        Self {
            monday: Some(hours),
            tuesday: Some(hours),
            wednesday: Some(hours),
            thursday: Some(hours),
            friday: Some(hours),
            saturday: Some(hours),
            sunday: Some(hours),
        }
    }
}

/// A calendar date on which the center is fully closed, overriding the
/// weekday's default hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialClosure {
    pub date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
}

/// True when `date` appears in the closure list.
pub fn is_specially_closed(date: NaiveDate, closures: &[SpecialClosure]) -> bool {
    closures.iter().any(|c| c.date == date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_for_missing_weekday() {
        let mut week = WeeklyHours::default();
        week.set(
            Weekday::Mon,
            OperatingHours::open_between(
                ClockTime::new(8, 0).unwrap(),
                ClockTime::new(16, 0).unwrap(),
            ),
        );

        let fallback = OperatingHours::default_window();
        let monday = week.resolve(Weekday::Mon, fallback);
        let tuesday = week.resolve(Weekday::Tue, fallback);

        assert_eq!(monday.open, ClockTime::new(8, 0).unwrap());
        assert_eq!(tuesday, fallback);
    }

    #[test]
    fn test_default_window_is_nine_to_six() {
        let hours = OperatingHours::default_window();
        assert!(!hours.is_closed);
        assert_eq!(hours.open.to_string(), "09:00");
        assert_eq!(hours.close.to_string(), "18:00");
    }

    #[test]
    fn test_has_open_window_rejects_inverted_hours() {
        let inverted = OperatingHours::open_between(
            ClockTime::new(18, 0).unwrap(),
            ClockTime::new(9, 0).unwrap(),
        );
        assert!(!inverted.has_open_window());

        let zero = OperatingHours::open_between(
            ClockTime::new(9, 0).unwrap(),
            ClockTime::new(9, 0).unwrap(),
        );
        assert!(!zero.has_open_window());

        assert!(!OperatingHours::closed().has_open_window());
    }

    #[test]
    fn test_special_closure_lookup() {
        let closures = vec![SpecialClosure {
            date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
            reason: Some("Christmas".to_string()),
        }];

        assert!(is_specially_closed(
            NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
            &closures
        ));
        assert!(!is_specially_closed(
            NaiveDate::from_ymd_opt(2026, 12, 26).unwrap(),
            &closures
        ));
    }

    #[test]
    fn test_weekly_hours_document_shape() {
        let json = r#"{
            "monday": { "isClosed": false, "open": "09:00", "close": "18:00" },
            "sunday": { "isClosed": true, "open": "00:00", "close": "00:00" }
        }"#;

        let week: WeeklyHours = serde_json::from_str(json).unwrap();
        assert!(week.monday.unwrap().has_open_window());
        assert!(week.sunday.unwrap().is_closed);
        assert!(week.tuesday.is_none());
    }
}

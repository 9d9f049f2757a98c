//! Timeperiod model and related types.
//!
//! This module defines the half-open [`Timeperiod`] interval and the
//! [`ActivityKind`] it carries. Time is measured in whole minutes since the
//! start of the generated week.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Minutes since the week-start reference.
pub type TimePoint = i64;

/// Opaque location identifier handed out by the sampler.
pub type LocationId = u32;

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: TimePoint = 1440;

/// The kind of activity an employee performs during a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Working at the assigned office.
    Work,
    /// At home between two working days.
    Home,
    /// An external meeting, possibly shared with other employees.
    Meeting,
    /// A private errand before or after work.
    Private,
}

impl ActivityKind {
    /// Returns the display name of the activity kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Work => "Work",
            ActivityKind::Home => "Home",
            ActivityKind::Meeting => "Meeting",
            ActivityKind::Private => "Private",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open interval `[begin, end)` spent at one location doing one activity.
///
/// Periods are immutable: splitting or shortening a period means removing it
/// from the schedule and adding replacements.
///
/// # Examples
///
/// ```
/// use activity_calendar::models::{ActivityKind, Timeperiod};
///
/// let work = Timeperiod::new(480, 960, 1, ActivityKind::Work);
/// assert_eq!(work.minutes(), 480);
/// assert!(work.overlaps(975, 15));
/// assert!(!work.overlaps(976, 15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timeperiod {
    begin: TimePoint,
    end: TimePoint,
    location: LocationId,
    activity: ActivityKind,
}

impl Timeperiod {
    /// Creates a new period. Callers guarantee `begin < end`.
    pub fn new(
        begin: TimePoint,
        end: TimePoint,
        location: LocationId,
        activity: ActivityKind,
    ) -> Self {
        Self {
            begin,
            end,
            location,
            activity,
        }
    }

    /// Start of the period (inclusive).
    pub fn begin(&self) -> TimePoint {
        self.begin
    }

    /// End of the period (exclusive).
    pub fn end(&self) -> TimePoint {
        self.end
    }

    /// Where the period takes place.
    pub fn location(&self) -> LocationId {
        self.location
    }

    /// What the employee does during the period.
    pub fn activity(&self) -> ActivityKind {
        self.activity
    }

    /// Length of the period in minutes.
    pub fn minutes(&self) -> TimePoint {
        self.end - self.begin
    }

    /// Returns true if the period is non-empty.
    pub fn is_valid(&self) -> bool {
        self.begin < self.end
    }

    /// Returns true if `point` lies within `[begin - grace, end + grace]`.
    pub fn overlaps(&self, point: TimePoint, grace_minutes: TimePoint) -> bool {
        point >= self.begin - grace_minutes && point <= self.end + grace_minutes
    }

    /// Returns a period with the same location and activity but new bounds.
    pub fn with_bounds(&self, begin: TimePoint, end: TimePoint) -> Self {
        Self::new(begin, end, self.location, self.activity)
    }
}

impl fmt::Display for Timeperiod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} @{}",
            format_time_point(self.begin),
            format_time_point(self.end),
            self.activity,
            self.location
        )
    }
}

/// Resolves a time point against a concrete week start.
///
/// # Examples
///
/// ```
/// use activity_calendar::models::to_datetime;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let at = to_datetime(monday, 1440 + 480);
/// assert_eq!(at.to_string(), "2026-10-20 08:00:00");
/// ```
pub fn to_datetime(week_start: NaiveDate, point: TimePoint) -> NaiveDateTime {
    NaiveDateTime::new(week_start, NaiveTime::MIN) + Duration::minutes(point)
}

/// Renders a time point as weekday and clock time, e.g. `Tue 08:00`.
pub fn format_time_point(point: TimePoint) -> String {
    let monday = NaiveDate::from_isoywd_opt(2024, 1, Weekday::Mon).unwrap_or_default();
    to_datetime(monday, point).format("%a %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_is_length() {
        let period = Timeperiod::new(990, 1890, 2, ActivityKind::Home);
        assert_eq!(period.minutes(), 900);
    }

    #[test]
    fn test_overlaps_without_grace_is_closed_interval() {
        let period = Timeperiod::new(480, 960, 1, ActivityKind::Work);
        assert!(period.overlaps(480, 0));
        assert!(period.overlaps(960, 0));
        assert!(!period.overlaps(479, 0));
        assert!(!period.overlaps(961, 0));
    }

    #[test]
    fn test_overlaps_with_grace_extends_both_sides() {
        let period = Timeperiod::new(480, 960, 1, ActivityKind::Work);
        assert!(period.overlaps(450, 30));
        assert!(period.overlaps(990, 30));
        assert!(!period.overlaps(449, 30));
    }

    #[test]
    fn test_is_valid_requires_positive_length() {
        assert!(Timeperiod::new(0, 1, 1, ActivityKind::Private).is_valid());
        assert!(!Timeperiod::new(5, 5, 1, ActivityKind::Private).is_valid());
        assert!(!Timeperiod::new(6, 5, 1, ActivityKind::Private).is_valid());
    }

    #[test]
    fn test_with_bounds_keeps_location_and_activity() {
        let work = Timeperiod::new(480, 960, 4, ActivityKind::Work);
        let shorter = work.with_bounds(480, 600);
        assert_eq!(shorter.location(), 4);
        assert_eq!(shorter.activity(), ActivityKind::Work);
        assert_eq!(shorter.end(), 600);
    }

    #[test]
    fn test_display_renders_weekday_and_clock() {
        let work = Timeperiod::new(1920, 2400, 3, ActivityKind::Work);
        assert_eq!(work.to_string(), "Tue 08:00-Tue 16:00 Work @3");
    }

    #[test]
    fn test_format_time_point_wraps_past_midnight() {
        assert_eq!(format_time_point(0), "Mon 00:00");
        assert_eq!(format_time_point(1890), "Tue 07:30");
    }

    #[test]
    fn test_activity_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ActivityKind::Meeting).unwrap(),
            "\"Meeting\""
        );
        let kind: ActivityKind = serde_json::from_str("\"Private\"").unwrap();
        assert_eq!(kind, ActivityKind::Private);
    }
}

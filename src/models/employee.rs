//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct together with the sampled
//! demographic attributes ([`Gender`], [`EmployeeTier`]) and the
//! [`EmployeeProfile`] the assembly step builds an employee from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::activity_record::ActivityRecord;
use super::schedule::Schedule;
use super::timeperiod::{ActivityKind, LocationId, TimePoint};

/// Gender as drawn by the demographic sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female employee.
    Female,
    /// Male employee.
    Male,
}

/// Position of an employee in the company hierarchy.
///
/// The tier selects working-time options and the share of the week spent
/// in external meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeTier {
    /// Company leadership.
    Boss,
    /// Middle management.
    MiddleManagement,
    /// Regular staff.
    Worker,
}

/// Sampled parameters for a single employee, before any schedule exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Sequential employee identifier.
    pub id: u32,
    /// Age in years.
    pub age: u32,
    /// Sampled gender.
    pub gender: Gender,
    /// Hierarchy tier.
    pub tier: EmployeeTier,
    /// Contracted minutes per week.
    pub weekly_minutes: TimePoint,
    /// Number of working days per week.
    pub working_days: u32,
    /// Workday start offset in minutes after midnight.
    pub begin: TimePoint,
    /// Home location.
    pub home: LocationId,
    /// Office location.
    pub office: LocationId,
    /// Meeting obligation in minutes.
    pub meeting_minutes: TimePoint,
}

/// An employee with a weekly schedule.
///
/// `meeting_minutes` starts out as the sampled meeting quota. While meetings
/// are being placed it is the quota still open; afterwards it is recomputed
/// as the total length of meetings on the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Sequential employee identifier.
    pub id: u32,
    /// Age in years.
    pub age: u32,
    /// Sampled gender.
    pub gender: Gender,
    /// Hierarchy tier.
    pub tier: EmployeeTier,
    /// Contracted minutes per week.
    pub weekly_minutes: TimePoint,
    /// Number of working days per week.
    pub working_days: u32,
    /// Minutes worked per day (`weekly_minutes / working_days`).
    pub daily_minutes: TimePoint,
    /// Workday start offset in minutes after midnight.
    pub begin: TimePoint,
    /// Home location.
    pub home: LocationId,
    /// Office location.
    pub office: LocationId,
    /// Meeting minutes (open quota during generation, scheduled total after).
    pub meeting_minutes: TimePoint,
    /// The employee's weekly calendar.
    pub schedule: Schedule,
}

impl Employee {
    /// Creates an employee from a sampled profile and its base schedule.
    pub fn new(profile: EmployeeProfile, schedule: Schedule) -> Self {
        Self {
            id: profile.id,
            age: profile.age,
            gender: profile.gender,
            tier: profile.tier,
            weekly_minutes: profile.weekly_minutes,
            working_days: profile.working_days,
            daily_minutes: profile.weekly_minutes / TimePoint::from(profile.working_days.max(1)),
            begin: profile.begin,
            home: profile.home,
            office: profile.office,
            meeting_minutes: profile.meeting_minutes,
            schedule,
        }
    }

    /// Sets `meeting_minutes` to the total length of scheduled meetings.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_calendar::models::{
    ///     ActivityKind, Employee, EmployeeProfile, EmployeeTier, Gender, Schedule, Timeperiod,
    /// };
    ///
    /// let mut schedule = Schedule::new();
    /// schedule.add(Timeperiod::new(600, 690, 9, ActivityKind::Meeting));
    /// let profile = EmployeeProfile {
    ///     id: 1,
    ///     age: 40,
    ///     gender: Gender::Female,
    ///     tier: EmployeeTier::Worker,
    ///     weekly_minutes: 2400,
    ///     working_days: 5,
    ///     begin: 480,
    ///     home: 20,
    ///     office: 1,
    ///     meeting_minutes: 240,
    /// };
    /// let mut employee = Employee::new(profile, schedule);
    /// assert_eq!(employee.recompute_meeting_minutes(), 90);
    /// ```
    pub fn recompute_meeting_minutes(&mut self) -> TimePoint {
        self.meeting_minutes = self.schedule.total_minutes(ActivityKind::Meeting);
        self.meeting_minutes
    }

    /// Contracted weekly hours.
    pub fn weekly_hours(&self) -> Decimal {
        minutes_to_hours(self.weekly_minutes)
    }

    /// Meeting hours as currently recorded in `meeting_minutes`.
    pub fn meeting_hours(&self) -> Decimal {
        minutes_to_hours(self.meeting_minutes)
    }

    /// Flattens the schedule into downstream activity records.
    pub fn activity_records(&self) -> Vec<ActivityRecord> {
        self.schedule
            .iter()
            .map(|period| ActivityRecord::from_period(self.id, period))
            .collect()
    }
}

/// Converts minutes to decimal hours.
pub fn minutes_to_hours(minutes: TimePoint) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timeperiod;

    fn create_test_profile() -> EmployeeProfile {
        EmployeeProfile {
            id: 7,
            age: 35,
            gender: Gender::Male,
            tier: EmployeeTier::MiddleManagement,
            weekly_minutes: 2310,
            working_days: 5,
            begin: 450,
            home: 42,
            office: 3,
            meeting_minutes: 300,
        }
    }

    #[test]
    fn test_daily_minutes_is_integer_share() {
        let employee = Employee::new(create_test_profile(), Schedule::new());
        assert_eq!(employee.daily_minutes, 462);
    }

    #[test]
    fn test_recompute_meeting_minutes_is_idempotent() {
        let mut schedule = Schedule::new();
        schedule.add(Timeperiod::new(600, 720, 9, ActivityKind::Meeting));
        schedule.add(Timeperiod::new(2100, 2160, 8, ActivityKind::Meeting));
        let mut employee = Employee::new(create_test_profile(), schedule);

        let first = employee.recompute_meeting_minutes();
        let second = employee.recompute_meeting_minutes();
        assert_eq!(first, 180);
        assert_eq!(first, second);
    }

    #[test]
    fn test_weekly_hours_as_decimal() {
        let employee = Employee::new(create_test_profile(), Schedule::new());
        assert_eq!(employee.weekly_hours(), Decimal::new(385, 1)); // 38.5
        assert_eq!(employee.meeting_hours(), Decimal::new(5, 0));
    }

    #[test]
    fn test_activity_records_follow_schedule_order() {
        let mut schedule = Schedule::new();
        schedule.add(Timeperiod::new(990, 1890, 42, ActivityKind::Home));
        schedule.add(Timeperiod::new(450, 912, 3, ActivityKind::Work));
        let employee = Employee::new(create_test_profile(), schedule);

        let records = employee.activity_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].activity, ActivityKind::Work);
        assert_eq!(records[1].location, 42);
        assert!(records.iter().all(|r| r.assigned_user == 7));
    }

    #[test]
    fn test_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeTier::MiddleManagement).unwrap(),
            "\"middle_management\""
        );
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }
}

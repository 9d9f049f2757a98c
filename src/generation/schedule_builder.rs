//! Base Work/Home skeleton for one employee's week.

use crate::models::{
    ActivityKind, EmployeeProfile, MINUTES_PER_DAY, Schedule, TimePoint, Timeperiod,
};

/// Builds the alternating Work/Home schedule for the given profile.
///
/// For every working day `i` the employee works
/// `[begin + i*1440, begin + i*1440 + daily)` at the office and is at home
/// from `travel_buffer` minutes after work until `travel_buffer` minutes
/// before the next day's start, where `daily = weekly_minutes / working_days`.
///
/// The builder does not check that a Home period is non-empty; profiles are
/// expected to leave more than `2 * travel_buffer` minutes between two
/// working days (see [`crate::generation::create_employee`]).
///
/// # Examples
///
/// ```
/// use activity_calendar::generation::build_base_schedule;
/// use activity_calendar::models::{ActivityKind, EmployeeProfile, EmployeeTier, Gender};
///
/// let profile = EmployeeProfile {
///     id: 1,
///     age: 30,
///     gender: Gender::Male,
///     tier: EmployeeTier::Worker,
///     weekly_minutes: 2400,
///     working_days: 5,
///     begin: 480,
///     home: 200,
///     office: 1,
///     meeting_minutes: 0,
/// };
/// let schedule = build_base_schedule(&profile, 30);
/// let homes = schedule.all_of(ActivityKind::Home);
/// assert_eq!((homes[0].begin(), homes[0].end()), (990, 1890));
/// ```
pub fn build_base_schedule(profile: &EmployeeProfile, travel_buffer: TimePoint) -> Schedule {
    let days = TimePoint::from(profile.working_days);
    let daily = if days > 0 {
        profile.weekly_minutes / days
    } else {
        0
    };

    let mut schedule = Schedule::new();
    for day in 0..days {
        let work_begin = profile.begin + day * MINUTES_PER_DAY;
        let work_end = work_begin + daily;
        let arrival_home = work_end + travel_buffer;
        let leave_home = profile.begin + (day + 1) * MINUTES_PER_DAY - travel_buffer;

        schedule.add(Timeperiod::new(
            work_begin,
            work_end,
            profile.office,
            ActivityKind::Work,
        ));
        schedule.add(Timeperiod::new(
            arrival_home,
            leave_home,
            profile.home,
            ActivityKind::Home,
        ));
    }
    schedule
}

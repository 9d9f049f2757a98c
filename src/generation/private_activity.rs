//! Private errands carved out of Home periods.
//!
//! A morning errand takes the last minutes of a Home period (right before the
//! next working day); an evening errand takes the first minutes (right after
//! work). Each Home period is split at most once per side.

use tracing::debug;

use crate::config::PrivateActivityConfig;
use crate::error::EngineResult;
use crate::models::{ActivityKind, Employee, TimePoint, Timeperiod};
use crate::sampling::Sampler;

/// Counts of errands inserted for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivateActivitySummary {
    /// Errands inserted at the end of a Home period.
    pub mornings: usize,
    /// Errands inserted at the start of a Home period.
    pub evenings: usize,
}

/// Inserts morning and evening private activities into the employee's
/// Home periods.
///
/// One morning decision is drawn per Home period, then one evening decision
/// per Home period of the resulting schedule. A positive decision is skipped
/// when the Home period is too short to keep a non-empty remainder.
pub fn insert_private_activities<S: Sampler>(
    employee: &mut Employee,
    config: &PrivateActivityConfig,
    sampler: &mut S,
) -> EngineResult<PrivateActivitySummary> {
    let mut summary = PrivateActivitySummary::default();
    let exclude = [employee.home, employee.office];

    for home in employee.schedule.all_of(ActivityKind::Home) {
        if !sampler.private_morning() {
            continue;
        }
        let Some((remainder, errand_begin)) =
            morning_split(&home, config.morning_minutes, config.travel_buffer_minutes)
        else {
            debug!(
                employee_id = employee.id,
                period = %home,
                "Home period too short for morning errand"
            );
            continue;
        };

        let location = sampler.home_location(&exclude);
        let errand = Timeperiod::new(errand_begin, home.end(), location, ActivityKind::Private);
        employee.schedule.replace(&home, [remainder, errand])?;
        summary.mornings += 1;
    }

    for home in employee.schedule.all_of(ActivityKind::Home) {
        if !sampler.private_evening() {
            continue;
        }
        let Some((errand_end, remainder)) =
            evening_split(&home, config.evening_minutes, config.travel_buffer_minutes)
        else {
            debug!(
                employee_id = employee.id,
                period = %home,
                "Home period too short for evening errand"
            );
            continue;
        };

        let location = sampler.home_location(&exclude);
        let errand = Timeperiod::new(home.begin(), errand_end, location, ActivityKind::Private);
        employee.schedule.replace(&home, [errand, remainder])?;
        summary.evenings += 1;
    }

    debug_assert!(employee.schedule.is_consistent());
    Ok(summary)
}

/// Splits off the last `duration` minutes; returns the Home remainder and
/// the errand start.
fn morning_split(
    home: &Timeperiod,
    duration: TimePoint,
    buffer: TimePoint,
) -> Option<(Timeperiod, TimePoint)> {
    let errand_begin = home.end() - duration;
    let remainder = home.with_bounds(home.begin(), errand_begin - buffer);
    remainder.is_valid().then_some((remainder, errand_begin))
}

/// Splits off the first `duration` minutes; returns the errand end and the
/// Home remainder.
fn evening_split(
    home: &Timeperiod,
    duration: TimePoint,
    buffer: TimePoint,
) -> Option<(TimePoint, Timeperiod)> {
    let errand_end = home.begin() + duration;
    let remainder = home.with_bounds(errand_end + buffer, home.end());
    remainder.is_valid().then_some((errand_end, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generation::build_base_schedule;
    use crate::models::{EmployeeProfile, EmployeeTier, Gender, Schedule};
    use crate::sampling::ScriptedSampler;

    fn create_test_employee() -> Employee {
        let profile = EmployeeProfile {
            id: 1,
            age: 30,
            gender: Gender::Female,
            tier: EmployeeTier::Worker,
            weekly_minutes: 2400,
            working_days: 5,
            begin: 480,
            home: 200,
            office: 1,
            meeting_minutes: 0,
        };
        let schedule = build_base_schedule(&profile, 30);
        Employee::new(profile, schedule)
    }

    fn private_config() -> PrivateActivityConfig {
        GeneratorConfig::default().settings().private_activity.clone()
    }

    fn privates(schedule: &Schedule) -> Vec<(TimePoint, TimePoint)> {
        schedule
            .all_of(ActivityKind::Private)
            .iter()
            .map(|p| (p.begin(), p.end()))
            .collect()
    }

    #[test]
    fn test_morning_errand_takes_end_of_home() {
        let mut employee = create_test_employee();
        let mut sampler = ScriptedSampler::new().with_mornings([true]).with_homes([555]);

        let summary =
            insert_private_activities(&mut employee, &private_config(), &mut sampler).unwrap();

        assert_eq!(summary.mornings, 1);
        assert_eq!(privates(&employee.schedule), vec![(1830, 1890)]);
        let homes = employee.schedule.all_of(ActivityKind::Home);
        assert_eq!((homes[0].begin(), homes[0].end()), (990, 1830));
        assert_eq!(employee.schedule.all_of(ActivityKind::Private)[0].location(), 555);
    }

    #[test]
    fn test_evening_errand_takes_start_of_home() {
        let mut employee = create_test_employee();
        let mut sampler = ScriptedSampler::new().with_evenings([false, true]);

        let summary =
            insert_private_activities(&mut employee, &private_config(), &mut sampler).unwrap();

        assert_eq!(summary.evenings, 1);
        assert_eq!(privates(&employee.schedule), vec![(2430, 2550)]);
        let homes = employee.schedule.all_of(ActivityKind::Home);
        assert_eq!((homes[1].begin(), homes[1].end()), (2550, 3330));
    }

    #[test]
    fn test_both_errands_on_same_home_period() {
        let mut employee = create_test_employee();
        let mut sampler = ScriptedSampler::new()
            .with_mornings([true])
            .with_evenings([true]);

        insert_private_activities(&mut employee, &private_config(), &mut sampler).unwrap();

        assert_eq!(privates(&employee.schedule), vec![(990, 1110), (1830, 1890)]);
        let homes = employee.schedule.all_of(ActivityKind::Home);
        assert_eq!((homes[0].begin(), homes[0].end()), (1110, 1830));
        assert!(employee.schedule.validate(employee.id).is_ok());
    }

    #[test]
    fn test_errand_location_excludes_home_and_office() {
        let mut employee = create_test_employee();
        employee.home = 1000;
        employee.office = 1001;
        let mut sampler = ScriptedSampler::new().with_mornings([true]);

        insert_private_activities(&mut employee, &private_config(), &mut sampler).unwrap();

        let errand = employee.schedule.all_of(ActivityKind::Private)[0];
        assert_eq!(errand.location(), 1002);
    }

    #[test]
    fn test_travel_buffer_is_configurable() {
        let mut employee = create_test_employee();
        let mut config = private_config();
        config.travel_buffer_minutes = 30;
        let mut sampler = ScriptedSampler::new().with_mornings([true]);

        insert_private_activities(&mut employee, &config, &mut sampler).unwrap();

        let homes = employee.schedule.all_of(ActivityKind::Home);
        assert_eq!((homes[0].begin(), homes[0].end()), (990, 1800));
    }

    #[test]
    fn test_short_home_period_is_left_alone() {
        let mut employee = create_test_employee();
        let mut config = private_config();
        config.morning_minutes = 900;
        let mut sampler = ScriptedSampler::new().with_mornings([true; 5]);

        let summary = insert_private_activities(&mut employee, &config, &mut sampler).unwrap();

        assert_eq!(summary.mornings, 0);
        assert_eq!(employee.schedule.len(), 10);
    }

    #[test]
    fn test_no_decisions_leave_schedule_unchanged() {
        let mut employee = create_test_employee();
        let before = employee.schedule.clone();
        let mut sampler = ScriptedSampler::new();

        let summary =
            insert_private_activities(&mut employee, &private_config(), &mut sampler).unwrap();

        assert_eq!(summary, PrivateActivitySummary::default());
        assert_eq!(employee.schedule, before);
    }
}

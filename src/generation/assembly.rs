//! Employee and company assembly.
//!
//! Draws employee profiles from the sampler, builds their base schedules and
//! runs the private-activity and meeting passes employee by employee, in id
//! order, sharing one [`MeetingLog`] per company.

use tracing::info;

use crate::config::{CompanyConfig, GeneratorConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Company, Employee, EmployeeProfile, EmployeeTier, LocationId, MINUTES_PER_DAY, TimePoint,
};
use crate::sampling::Sampler;

use super::meeting_coordinator::{MeetingCoordinator, MeetingLog};
use super::private_activity::insert_private_activities;
use super::schedule_builder::build_base_schedule;

/// Meeting quotas are whole multiples of this many minutes.
pub const MEETING_QUOTA_STEP: TimePoint = 30;

/// Number of employees per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    /// Number of bosses (at least one).
    pub bosses: usize,
    /// Number of middle managers.
    pub middle_management: usize,
    /// Number of workers.
    pub workers: usize,
}

impl Composition {
    /// Splits `employees` into tiers according to the configured shares.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_calendar::config::GeneratorConfig;
    /// use activity_calendar::generation::Composition;
    ///
    /// let config = GeneratorConfig::default();
    /// let split = Composition::for_company(250, &config.settings().company);
    /// assert_eq!((split.bosses, split.middle_management, split.workers), (2, 25, 223));
    /// ```
    pub fn for_company(employees: usize, config: &CompanyConfig) -> Self {
        let bosses = ((employees as f64 * config.boss_share) as usize)
            .max(1)
            .min(employees);
        let middle_management = ((employees as f64 * config.middle_management_share) as usize)
            .min(employees - bosses);
        Self {
            bosses,
            middle_management,
            workers: employees - bosses - middle_management,
        }
    }

    /// Tiers in creation order with their counts.
    fn batches(&self) -> [(EmployeeTier, usize); 3] {
        [
            (EmployeeTier::Boss, self.bosses),
            (EmployeeTier::MiddleManagement, self.middle_management),
            (EmployeeTier::Worker, self.workers),
        ]
    }
}

/// Converts a meeting share into a quota, rounded down to whole
/// [`MEETING_QUOTA_STEP`]s after rounding the raw minutes up.
///
/// # Examples
///
/// ```
/// use activity_calendar::generation::meeting_quota;
///
/// assert_eq!(meeting_quota(2400, 12.5), 300);
/// assert_eq!(meeting_quota(2400, 1.0), 0);
/// assert_eq!(meeting_quota(2400, -3.0), 0);
/// ```
pub fn meeting_quota(weekly_minutes: TimePoint, share_percent: f64) -> TimePoint {
    let raw = (weekly_minutes as f64 * share_percent / 100.0).ceil() as TimePoint;
    (raw / MEETING_QUOTA_STEP * MEETING_QUOTA_STEP).max(0)
}

/// Draws a profile for one employee and builds their base schedule.
///
/// Returns `InvalidEmployee` if the drawn working time cannot produce a
/// consistent skeleton (no working day, or no time at home between days).
pub fn create_employee<S: Sampler>(
    id: u32,
    tier: EmployeeTier,
    office: LocationId,
    config: &GeneratorConfig,
    sampler: &mut S,
) -> EngineResult<Employee> {
    let gender = sampler.gender();
    let age = sampler.age(gender);
    let (weekly_minutes, working_days) = sampler.working_time(gender, tier);
    let begin = sampler.work_begin();
    let home = sampler.home_location(&[office]);
    let meeting_minutes = meeting_quota(weekly_minutes, sampler.meeting_share(tier));

    let profile = EmployeeProfile {
        id,
        age,
        gender,
        tier,
        weekly_minutes,
        working_days,
        begin,
        home,
        office,
        meeting_minutes,
    };
    validate_profile(&profile, config.travel_buffer())?;

    let schedule = build_base_schedule(&profile, config.travel_buffer());
    Ok(Employee::new(profile, schedule))
}

fn validate_profile(profile: &EmployeeProfile, travel_buffer: TimePoint) -> EngineResult<()> {
    if profile.working_days == 0 {
        return Err(EngineError::InvalidEmployee {
            field: "working_days".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if profile.weekly_minutes <= 0 {
        return Err(EngineError::InvalidEmployee {
            field: "weekly_minutes".to_string(),
            message: "must be positive".to_string(),
        });
    }
    let daily = profile.weekly_minutes / TimePoint::from(profile.working_days);
    if daily + 2 * travel_buffer >= MINUTES_PER_DAY {
        return Err(EngineError::InvalidEmployee {
            field: "weekly_minutes".to_string(),
            message: format!(
                "{} minutes per day leave no time at home with a {} minute travel buffer",
                daily, travel_buffer
            ),
        });
    }
    Ok(())
}

/// Generates a company of `employees` people working at `offices` distinct
/// office locations.
///
/// Employees are created tier by tier (bosses, middle management, workers)
/// with sequential ids starting at 1, each assigned a uniformly drawn office.
/// Private activities and meetings are then placed employee by employee in
/// id order; an employee can only join meetings created by an employee
/// with a lower id.
pub fn create_company<S: Sampler>(
    employees: usize,
    offices: usize,
    config: &GeneratorConfig,
    sampler: &mut S,
) -> EngineResult<Company> {
    if employees == 0 {
        return Err(EngineError::InvalidConfig {
            field: "employees".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    let pool = config.demographics().locations.offices.len();
    if offices == 0 || offices > pool {
        return Err(EngineError::InvalidConfig {
            field: "offices".to_string(),
            message: format!("must be between 1 and {}", pool),
        });
    }

    let mut office_locations: Vec<LocationId> = Vec::with_capacity(offices);
    for _ in 0..offices {
        let office = sampler.office_location(&office_locations);
        office_locations.push(office);
    }

    let composition = Composition::for_company(employees, &config.settings().company);
    info!(
        workers = composition.workers,
        middle_management = composition.middle_management,
        bosses = composition.bosses,
        offices = ?office_locations,
        "Creating company"
    );

    let mut staff = Vec::with_capacity(employees);
    let mut next_id: u32 = 1;
    for (tier, count) in composition.batches() {
        for _ in 0..count {
            let office = office_locations[sampler.index(office_locations.len())];
            staff.push(create_employee(next_id, tier, office, config, sampler)?);
            next_id += 1;
        }
    }

    let coordinator = MeetingCoordinator::new(config);
    let private_config = &config.settings().private_activity;
    let mut log = MeetingLog::new();

    for employee in staff.iter_mut() {
        info!(
            employee_id = employee.id,
            tier = ?employee.tier,
            weekly_hours = %employee.weekly_hours(),
            meeting_hours = %employee.meeting_hours(),
            "Placing activities"
        );
        insert_private_activities(employee, private_config, sampler)?;
        let outcome = coordinator.create_meetings_for(employee, &mut log, sampler)?;
        info!(
            employee_id = employee.id,
            weekly_hours = %employee.weekly_hours(),
            meeting_hours = %employee.meeting_hours(),
            joined = outcome.joined,
            created = outcome.created,
            attempts = outcome.attempts,
            "Activities placed"
        );
    }
    info!(meetings = log.len(), "External meetings created");

    Ok(Company {
        offices: office_locations,
        employees: staff,
        meetings: log.into_meetings(),
    })
}

//! Meeting coordination across the employees of one company.
//!
//! Meetings created for one employee are recorded in a [`MeetingLog`] that
//! is shared by every later employee of the same generation run. Each
//! employee first tries to join logged meetings, then creates new ones inside
//! their own Work periods until the meeting quota is met or the attempt
//! budget runs out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CoordinatorConfig, GeneratorConfig};
use crate::error::EngineResult;
use crate::models::{ActivityKind, Employee, TimePoint, Timeperiod};
use crate::sampling::Sampler;

/// Append-only record of the meetings created during one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingLog {
    meetings: Vec<Timeperiod>,
}

impl MeetingLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a newly created meeting.
    pub fn record(&mut self, meeting: Timeperiod) {
        self.meetings.push(meeting);
    }

    /// Meetings in creation order.
    pub fn meetings(&self) -> &[Timeperiod] {
        &self.meetings
    }

    /// Number of recorded meetings.
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// Returns true if no meeting was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Consumes the log, returning the meetings in creation order.
    pub fn into_meetings(self) -> Vec<Timeperiod> {
        self.meetings
    }
}

/// What one coordination pass did for an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinationOutcome {
    /// Join budget drawn for this employee.
    pub join_budget: u32,
    /// Logged meetings the employee joined.
    pub joined: u32,
    /// Meetings created for the employee.
    pub created: u32,
    /// Placement attempts used while creating meetings.
    pub attempts: u32,
}

/// Where a new meeting goes inside a Work period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingPlacement {
    /// Meeting start.
    pub begin: TimePoint,
    /// Meeting end, never after the Work period's end.
    pub end: TimePoint,
}

/// Returns true if `lead` minutes of work followed by a meeting of
/// `duration` minutes fit into a Work period of `work_minutes`.
pub fn fits_inside(work_minutes: TimePoint, lead: TimePoint, duration: TimePoint) -> bool {
    duration > 0 && lead + duration <= work_minutes
}

/// Places meetings into employee schedules.
#[derive(Debug, Clone)]
pub struct MeetingCoordinator {
    settings: CoordinatorConfig,
    travel_buffer: TimePoint,
}

impl MeetingCoordinator {
    /// Creates a coordinator from the generator configuration.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            settings: config.settings().coordinator.clone(),
            travel_buffer: config.travel_buffer(),
        }
    }

    /// Runs both coordination phases for one employee.
    ///
    /// Afterwards `employee.meeting_minutes` equals the total length of the
    /// meetings on the employee's schedule, which may fall short of (or
    /// slightly exceed) the sampled quota.
    pub fn create_meetings_for<S: Sampler>(
        &self,
        employee: &mut Employee,
        log: &mut MeetingLog,
        sampler: &mut S,
    ) -> EngineResult<CoordinationOutcome> {
        let mut outcome = CoordinationOutcome::default();

        self.join_existing_meetings(employee, log, sampler, &mut outcome)?;
        self.create_new_meetings(employee, log, sampler, &mut outcome)?;

        employee.recompute_meeting_minutes();
        debug_assert!(
            employee.schedule.is_consistent(),
            "overlapping schedule for employee {}",
            employee.id
        );
        Ok(outcome)
    }

    fn join_existing_meetings<S: Sampler>(
        &self,
        employee: &mut Employee,
        log: &MeetingLog,
        sampler: &mut S,
        outcome: &mut CoordinationOutcome,
    ) -> EngineResult<()> {
        outcome.join_budget = sampler.count(self.settings.max_joins);

        for meeting in log.meetings() {
            for work in employee.schedule.all_of(ActivityKind::Work) {
                let eligible = outcome.joined < outcome.join_budget
                    && employee.meeting_minutes > 0
                    && meeting.end() == work.end()
                    && work.begin() + self.settings.work_before_joined_meeting + self.travel_buffer
                        <= meeting.begin();
                if !eligible || !sampler.chance(self.settings.join_probability) {
                    continue;
                }

                self.replace_with_meeting(employee, &work, *meeting)?;
                employee.meeting_minutes -= meeting.minutes();
                outcome.joined += 1;
                debug!(employee_id = employee.id, meeting = %meeting, "Joined meeting");
                break;
            }
        }
        Ok(())
    }

    fn create_new_meetings<S: Sampler>(
        &self,
        employee: &mut Employee,
        log: &mut MeetingLog,
        sampler: &mut S,
        outcome: &mut CoordinationOutcome,
    ) -> EngineResult<()> {
        while outcome.attempts < self.settings.max_attempts && employee.meeting_minutes > 0 {
            outcome.attempts += 1;

            let works = employee.schedule.all_of(ActivityKind::Work);
            if works.is_empty() {
                break;
            }
            let work = works[sampler.index(works.len())];
            let duration = sampler.meeting_duration().min(employee.meeting_minutes);
            let lead_times = &self.settings.lead_times;
            let lead = lead_times[sampler.index(lead_times.len())];

            let Some(placement) = self.plan_meeting(&work, lead, duration) else {
                continue;
            };

            let location = sampler.office_location(&[work.location()]);
            let meeting = Timeperiod::new(
                placement.begin,
                placement.end,
                location,
                ActivityKind::Meeting,
            );
            log.record(meeting);
            self.replace_with_meeting(employee, &work, meeting)?;
            employee.meeting_minutes -= meeting.minutes();
            outcome.created += 1;
            debug!(employee_id = employee.id, meeting = %meeting, lead, "Created meeting");
        }
        Ok(())
    }

    /// Computes where a meeting of `duration` minutes starting `lead` minutes
    /// into `work` would go, or `None` if it does not fit.
    ///
    /// The meeting starts after the lead time plus travel. It is stretched or
    /// truncated to end with the Work period when no time would remain to
    /// travel back to work afterwards.
    pub fn plan_meeting(
        &self,
        work: &Timeperiod,
        lead: TimePoint,
        duration: TimePoint,
    ) -> Option<MeetingPlacement> {
        if !fits_inside(work.minutes(), lead, duration) {
            return None;
        }

        let begin = work.begin() + lead + self.travel_buffer;
        if begin >= work.end() {
            return None;
        }

        let natural_end = begin + duration;
        let end = if natural_end + self.travel_buffer >= work.end() {
            work.end()
        } else {
            natural_end
        };
        Some(MeetingPlacement { begin, end })
    }

    /// Replaces `work` with the work before the meeting, the meeting itself
    /// and, if the meeting ends early, the work after it. Travel to and from
    /// the meeting is left unscheduled.
    fn replace_with_meeting(
        &self,
        employee: &mut Employee,
        work: &Timeperiod,
        meeting: Timeperiod,
    ) -> EngineResult<()> {
        let before = work.with_bounds(work.begin(), meeting.begin() - self.travel_buffer);
        let after = work.with_bounds(meeting.end() + self.travel_buffer, work.end());

        let mut replacements = vec![meeting];
        if before.is_valid() {
            replacements.push(before);
        }
        if meeting.end() < work.end() && after.is_valid() {
            replacements.push(after);
        }
        employee.schedule.replace(work, replacements)
    }
}

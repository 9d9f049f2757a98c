//! Sampler that replays predetermined draws.

use std::collections::VecDeque;

use crate::models::{EmployeeTier, Gender, LocationId, TimePoint};

use super::Sampler;

/// A [`Sampler`] that answers from fixed values and queues.
///
/// Demographic draws return fixed values. Every other draw is taken from its
/// queue; an exhausted queue falls back to a neutral answer (no private
/// activity, index 0, count 0, no join, 60 minute meetings). Indices are
/// reduced modulo the requested length.
///
/// # Example
///
/// ```
/// use activity_calendar::sampling::{Sampler, ScriptedSampler};
///
/// let mut sampler = ScriptedSampler::new()
///     .with_meeting_durations([90, 30])
///     .with_chances([true]);
/// assert_eq!(sampler.meeting_duration(), 90);
/// assert_eq!(sampler.meeting_duration(), 30);
/// assert_eq!(sampler.meeting_duration(), 60);
/// assert!(sampler.chance(0.3));
/// assert!(!sampler.chance(0.3));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    gender: Gender,
    age: u32,
    working_time: (TimePoint, u32),
    work_begin: TimePoint,
    meeting_share: f64,
    homes: VecDeque<LocationId>,
    offices: VecDeque<LocationId>,
    meeting_durations: VecDeque<TimePoint>,
    mornings: VecDeque<bool>,
    evenings: VecDeque<bool>,
    indices: VecDeque<usize>,
    counts: VecDeque<u32>,
    chances: VecDeque<bool>,
    next_location: LocationId,
}

impl Default for ScriptedSampler {
    fn default() -> Self {
        Self {
            gender: Gender::Female,
            age: 40,
            working_time: (2400, 5),
            work_begin: 480,
            meeting_share: 10.0,
            homes: VecDeque::new(),
            offices: VecDeque::new(),
            meeting_durations: VecDeque::new(),
            mornings: VecDeque::new(),
            evenings: VecDeque::new(),
            indices: VecDeque::new(),
            counts: VecDeque::new(),
            chances: VecDeque::new(),
            next_location: 1000,
        }
    }
}

impl ScriptedSampler {
    /// Creates a sampler with neutral defaults and empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `(weekly_minutes, working_days)` answer.
    pub fn with_working_time(mut self, weekly_minutes: TimePoint, working_days: u32) -> Self {
        self.working_time = (weekly_minutes, working_days);
        self
    }

    /// Sets the workday start answer.
    pub fn with_work_begin(mut self, begin: TimePoint) -> Self {
        self.work_begin = begin;
        self
    }

    /// Sets the meeting share answer, in percent.
    pub fn with_meeting_share(mut self, percent: f64) -> Self {
        self.meeting_share = percent;
        self
    }

    /// Queues home location answers.
    pub fn with_homes(mut self, homes: impl IntoIterator<Item = LocationId>) -> Self {
        self.homes.extend(homes);
        self
    }

    /// Queues office location answers.
    pub fn with_offices(mut self, offices: impl IntoIterator<Item = LocationId>) -> Self {
        self.offices.extend(offices);
        self
    }

    /// Queues meeting duration answers.
    pub fn with_meeting_durations(
        mut self,
        durations: impl IntoIterator<Item = TimePoint>,
    ) -> Self {
        self.meeting_durations.extend(durations);
        self
    }

    /// Queues morning private-activity decisions.
    pub fn with_mornings(mut self, decisions: impl IntoIterator<Item = bool>) -> Self {
        self.mornings.extend(decisions);
        self
    }

    /// Queues evening private-activity decisions.
    pub fn with_evenings(mut self, decisions: impl IntoIterator<Item = bool>) -> Self {
        self.evenings.extend(decisions);
        self
    }

    /// Queues uniform index answers.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Queues uniform count answers.
    pub fn with_counts(mut self, counts: impl IntoIterator<Item = u32>) -> Self {
        self.counts.extend(counts);
        self
    }

    /// Queues Bernoulli answers.
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Number of queued meeting durations not yet drawn.
    pub fn remaining_meeting_durations(&self) -> usize {
        self.meeting_durations.len()
    }

    fn fresh_location(&mut self, exclude: &[LocationId]) -> LocationId {
        while exclude.contains(&self.next_location) {
            self.next_location += 1;
        }
        let location = self.next_location;
        self.next_location += 1;
        location
    }
}

impl Sampler for ScriptedSampler {
    fn gender(&mut self) -> Gender {
        self.gender
    }

    fn age(&mut self, _gender: Gender) -> u32 {
        self.age
    }

    fn working_time(&mut self, _gender: Gender, _tier: EmployeeTier) -> (TimePoint, u32) {
        self.working_time
    }

    fn work_begin(&mut self) -> TimePoint {
        self.work_begin
    }

    fn meeting_share(&mut self, _tier: EmployeeTier) -> f64 {
        self.meeting_share
    }

    fn home_location(&mut self, exclude: &[LocationId]) -> LocationId {
        match self.homes.pop_front() {
            Some(home) => home,
            None => self.fresh_location(exclude),
        }
    }

    fn office_location(&mut self, exclude: &[LocationId]) -> LocationId {
        match self.offices.pop_front() {
            Some(office) => office,
            None => self.fresh_location(exclude),
        }
    }

    fn meeting_duration(&mut self) -> TimePoint {
        self.meeting_durations.pop_front().unwrap_or(60)
    }

    fn private_morning(&mut self) -> bool {
        self.mornings.pop_front().unwrap_or(false)
    }

    fn private_evening(&mut self) -> bool {
        self.evenings.pop_front().unwrap_or(false)
    }

    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len.max(1)
    }

    fn count(&mut self, max: u32) -> u32 {
        self.counts.pop_front().unwrap_or(0).min(max)
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}

//! Sampling capability consumed by the generation passes.
//!
//! Every random decision of the engine goes through the [`Sampler`] trait:
//! demographic draws, location picks, meeting lengths, private-activity coin
//! flips, and the uniform choices the meeting coordinator makes. Production
//! code uses [`ConfiguredSampler`] over a seeded RNG; tests can replay exact
//! decision sequences with [`ScriptedSampler`].

mod configured;
mod scripted;

pub use configured::ConfiguredSampler;
pub use scripted::ScriptedSampler;

use crate::models::{EmployeeTier, Gender, LocationId, TimePoint};

/// Source of all random draws used during generation.
pub trait Sampler {
    /// Draws an employee's gender.
    fn gender(&mut self) -> Gender;

    /// Draws an age for the given gender.
    fn age(&mut self, gender: Gender) -> u32;

    /// Draws `(weekly_minutes, working_days)` for the given gender and tier.
    fn working_time(&mut self, gender: Gender, tier: EmployeeTier) -> (TimePoint, u32);

    /// Draws a workday start offset in minutes after midnight.
    fn work_begin(&mut self) -> TimePoint;

    /// Draws the percentage of weekly minutes spent in meetings.
    fn meeting_share(&mut self, tier: EmployeeTier) -> f64;

    /// Draws a residential location not contained in `exclude`.
    fn home_location(&mut self, exclude: &[LocationId]) -> LocationId;

    /// Draws an office location not contained in `exclude`.
    fn office_location(&mut self, exclude: &[LocationId]) -> LocationId;

    /// Draws the length of a new meeting.
    fn meeting_duration(&mut self) -> TimePoint;

    /// Decides whether to insert an errand before the next working day.
    fn private_morning(&mut self) -> bool;

    /// Decides whether to insert an errand after work.
    fn private_evening(&mut self) -> bool;

    /// Picks an index uniformly from `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Draws a count uniformly from `0..=max`.
    fn count(&mut self, max: u32) -> u32;

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

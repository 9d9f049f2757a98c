//! Generation passes for the activity calendar.
//!
//! This module builds each employee's Work/Home skeleton, carves private
//! errands out of Home periods, coordinates external meetings across
//! employees, and assembles whole companies from sampled profiles.

mod assembly;
mod meeting_coordinator;
mod private_activity;
mod schedule_builder;

pub use assembly::{Composition, MEETING_QUOTA_STEP, create_company, create_employee, meeting_quota};
pub use meeting_coordinator::{
    CoordinationOutcome, MeetingCoordinator, MeetingLog, MeetingPlacement, fits_inside,
};
pub use private_activity::{PrivateActivitySummary, insert_private_activities};
pub use schedule_builder::build_base_schedule;

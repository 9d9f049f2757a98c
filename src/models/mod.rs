//! Core data models for the activity calendar generator.
//!
//! This module contains the time model ([`Timeperiod`], [`Schedule`]) and the
//! entities built on it.

mod activity_record;
mod company;
mod employee;
mod schedule;
mod timeperiod;

pub use activity_record::ActivityRecord;
pub use company::Company;
pub use employee::{Employee, EmployeeProfile, EmployeeTier, Gender, minutes_to_hours};
pub use schedule::Schedule;
pub use timeperiod::{
    ActivityKind, LocationId, MINUTES_PER_DAY, TimePoint, Timeperiod, format_time_point,
    to_datetime,
};

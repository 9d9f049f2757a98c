//! Weekly activity calendar generator for synthetic company instances.
//!
//! This crate builds per-employee weekly schedules of Work, Home, Meeting and
//! Private periods for a sampled company. Meetings are coordinated across
//! employees so that later employees can join meetings created earlier.
//! The resulting schedules are flattened into activity records for
//! downstream mobility-offer generation.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod sampling;

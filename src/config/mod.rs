//! Configuration loading and management for the activity calendar generator.
//!
//! This module loads generator settings and demographic sampling tables from
//! YAML files, or falls back to the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use activity_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Join probability: {}", config.config().settings().coordinator.join_probability);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgeRanges, CompanyConfig, CoordinatorConfig, Demographics, GeneratorConfig, GeneratorSettings,
    IntRange, LocationPools, PrivateActivityConfig, PrivateProbabilities, ShareRange, TierTable,
    TimingConfig, WorkingTimeOption,
};

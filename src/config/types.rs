//! Configuration types for schedule generation.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files, together with the built-in
//! defaults used when no configuration directory is given.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeTier, LocationId, MINUTES_PER_DAY, TimePoint};

/// Timing constants shared by every generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Minutes reserved for travel between consecutive activities.
    pub travel_buffer_minutes: TimePoint,
    /// Calendar date of minute zero, used only for rendering.
    pub week_start: NaiveDate,
}

/// Meeting coordinator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Probability that an eligible employee joins an existing meeting.
    pub join_probability: f64,
    /// Upper bound (inclusive) of the per-employee join budget draw.
    pub max_joins: u32,
    /// Placement attempts when creating new meetings.
    pub max_attempts: u32,
    /// Candidate minutes of work before a newly created meeting.
    pub lead_times: Vec<TimePoint>,
    /// Minimum minutes of work before a joined meeting.
    pub work_before_joined_meeting: TimePoint,
}

/// Private activity parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateActivityConfig {
    /// Length of the errand carved from the end of a Home period.
    pub morning_minutes: TimePoint,
    /// Length of the errand carved from the start of a Home period.
    pub evening_minutes: TimePoint,
    /// Gap left between the errand and the Home remainder.
    pub travel_buffer_minutes: TimePoint,
}

/// Company composition parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Share of employees that are bosses (at least one boss is created).
    pub boss_share: f64,
    /// Share of employees in middle management.
    pub middle_management_share: f64,
    /// Default number of office locations.
    pub offices: usize,
}

/// Contents of `generator.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Timing constants.
    pub timing: TimingConfig,
    /// Meeting coordinator parameters.
    pub coordinator: CoordinatorConfig,
    /// Private activity parameters.
    pub private_activity: PrivateActivityConfig,
    /// Company composition.
    pub company: CompanyConfig,
}

/// An inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    /// Lower bound (inclusive).
    pub min: u32,
    /// Upper bound (inclusive).
    pub max: u32,
}

/// An inclusive percentage range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareRange {
    /// Lower bound in percent.
    pub min: f64,
    /// Upper bound in percent.
    pub max: f64,
}

/// Age ranges per gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRanges {
    /// Ages for female employees.
    pub female: IntRange,
    /// Ages for male employees.
    pub male: IntRange,
}

/// A weekly working-time arrangement with per-gender weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingTimeOption {
    /// Contracted minutes per week.
    pub weekly_minutes: TimePoint,
    /// Working days per week.
    pub working_days: u32,
    /// Relative weight for female employees.
    pub female_weight: f64,
    /// Relative weight for male employees.
    pub male_weight: f64,
}

/// One value per employee tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable<T> {
    /// Value for bosses.
    pub boss: T,
    /// Value for middle management.
    pub middle_management: T,
    /// Value for workers.
    pub worker: T,
}

impl<T> TierTable<T> {
    /// Returns the entry for the given tier.
    pub fn get(&self, tier: EmployeeTier) -> &T {
        match tier {
            EmployeeTier::Boss => &self.boss,
            EmployeeTier::MiddleManagement => &self.middle_management,
            EmployeeTier::Worker => &self.worker,
        }
    }

    fn entries(&self) -> [(&'static str, &T); 3] {
        [
            ("boss", &self.boss),
            ("middle_management", &self.middle_management),
            ("worker", &self.worker),
        ]
    }
}

/// Probabilities of inserting private activities around work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrivateProbabilities {
    /// Probability of an errand before the next working day.
    pub morning: f64,
    /// Probability of an errand after work.
    pub evening: f64,
}

/// Location pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPools {
    /// Residential location ids (inclusive range).
    pub homes: IntRange,
    /// Office location ids.
    pub offices: Vec<LocationId>,
}

/// Contents of `demographics.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    /// Probability that an employee is female.
    pub female_share: f64,
    /// Age ranges per gender.
    pub age: AgeRanges,
    /// Working-time options per tier.
    pub working_time: TierTable<Vec<WorkingTimeOption>>,
    /// Share of weekly minutes spent in meetings, per tier.
    pub meeting_share_percent: TierTable<ShareRange>,
    /// Candidate workday start offsets (minutes after midnight).
    pub work_begin_minutes: Vec<TimePoint>,
    /// Candidate meeting lengths.
    pub meeting_duration_minutes: Vec<TimePoint>,
    /// Private activity probabilities.
    pub private_activity_probability: PrivateProbabilities,
    /// Location pools.
    pub locations: LocationPools,
}

/// The complete generator configuration.
///
/// Aggregates `generator.yaml` and `demographics.yaml`. The [`Default`]
/// implementation carries the same values as the shipped `config/default`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    settings: GeneratorSettings,
    demographics: Demographics,
}

impl GeneratorConfig {
    /// Creates a validated configuration from its component parts.
    pub fn new(settings: GeneratorSettings, demographics: Demographics) -> EngineResult<Self> {
        let config = Self {
            settings,
            demographics,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the generator settings.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Returns the demographic tables.
    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    /// Minutes reserved for travel between consecutive activities.
    pub fn travel_buffer(&self) -> TimePoint {
        self.settings.timing.travel_buffer_minutes
    }

    /// Checks ranges and cross-field consistency.
    pub fn validate(&self) -> EngineResult<()> {
        let s = &self.settings;
        let d = &self.demographics;
        let buffer = s.timing.travel_buffer_minutes;

        ensure(buffer >= 0, "timing.travel_buffer_minutes", "must not be negative")?;
        ensure_probability(s.coordinator.join_probability, "coordinator.join_probability")?;
        ensure(
            !s.coordinator.lead_times.is_empty(),
            "coordinator.lead_times",
            "must not be empty",
        )?;
        ensure(
            s.coordinator.lead_times.iter().all(|&l| l > 0),
            "coordinator.lead_times",
            "must be positive",
        )?;
        ensure(
            s.coordinator.work_before_joined_meeting >= 0,
            "coordinator.work_before_joined_meeting",
            "must not be negative",
        )?;
        ensure(
            s.private_activity.morning_minutes > 0 && s.private_activity.evening_minutes > 0,
            "private_activity",
            "durations must be positive",
        )?;
        ensure(
            s.private_activity.travel_buffer_minutes >= 0,
            "private_activity.travel_buffer_minutes",
            "must not be negative",
        )?;
        ensure_probability(s.company.boss_share, "company.boss_share")?;
        ensure_probability(s.company.middle_management_share, "company.middle_management_share")?;
        ensure(
            s.company.boss_share + s.company.middle_management_share <= 1.0,
            "company",
            "boss and middle management shares exceed 1",
        )?;
        ensure(s.company.offices >= 1, "company.offices", "must be at least 1")?;

        ensure_probability(d.female_share, "female_share")?;
        for (name, range) in [("age.female", d.age.female), ("age.male", d.age.male)] {
            ensure(range.min <= range.max, name, "min exceeds max")?;
        }
        for (tier, options) in d.working_time.entries() {
            let field = format!("working_time.{}", tier);
            ensure(!options.is_empty(), &field, "must not be empty")?;
            for option in options {
                ensure(option.working_days >= 1, &field, "working_days must be at least 1")?;
                ensure(
                    option.working_days <= 7,
                    &field,
                    "working_days must not exceed 7",
                )?;
                ensure(option.weekly_minutes > 0, &field, "weekly_minutes must be positive")?;
                let daily = option.weekly_minutes / TimePoint::from(option.working_days);
                ensure(
                    daily + 2 * buffer < MINUTES_PER_DAY,
                    &field,
                    "daily minutes plus travel leave no time at home",
                )?;
                ensure(
                    option.female_weight >= 0.0 && option.male_weight >= 0.0,
                    &field,
                    "weights must not be negative",
                )?;
            }
            for (gender, total) in [
                ("female", options.iter().map(|o| o.female_weight).sum::<f64>()),
                ("male", options.iter().map(|o| o.male_weight).sum::<f64>()),
            ] {
                ensure(
                    total > 0.0,
                    &field,
                    &format!("{} weights must not all be zero", gender),
                )?;
            }
        }
        for (tier, share) in d.meeting_share_percent.entries() {
            ensure(
                share.min >= 0.0 && share.min <= share.max && share.max <= 100.0,
                &format!("meeting_share_percent.{}", tier),
                "must satisfy 0 <= min <= max <= 100",
            )?;
        }
        ensure(
            !d.work_begin_minutes.is_empty(),
            "work_begin_minutes",
            "must not be empty",
        )?;
        ensure(
            d.work_begin_minutes
                .iter()
                .all(|&b| (0..MINUTES_PER_DAY).contains(&b)),
            "work_begin_minutes",
            "must lie within one day",
        )?;
        ensure(
            !d.meeting_duration_minutes.is_empty(),
            "meeting_duration_minutes",
            "must not be empty",
        )?;
        ensure(
            d.meeting_duration_minutes.iter().all(|&m| m > 0),
            "meeting_duration_minutes",
            "must be positive",
        )?;
        ensure_probability(
            d.private_activity_probability.morning,
            "private_activity_probability.morning",
        )?;
        ensure_probability(
            d.private_activity_probability.evening,
            "private_activity_probability.evening",
        )?;
        ensure(
            d.locations.homes.min <= d.locations.homes.max
                && d.locations.homes.max - d.locations.homes.min >= 2,
            "locations.homes",
            "must hold at least three locations",
        )?;
        ensure(
            d.locations.offices.len() >= 2,
            "locations.offices",
            "must hold at least two locations",
        )?;
        ensure(
            d.locations.offices.len() >= s.company.offices,
            "locations.offices",
            "fewer locations than company.offices",
        )?;

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let full_time = |female_weight, male_weight| WorkingTimeOption {
            weekly_minutes: 2400,
            working_days: 5,
            female_weight,
            male_weight,
        };
        let long_hours = |weekly_minutes| WorkingTimeOption {
            weekly_minutes,
            working_days: 5,
            female_weight: 1.0,
            male_weight: 1.0,
        };

        Self {
            settings: GeneratorSettings {
                timing: TimingConfig {
                    travel_buffer_minutes: 30,
                    week_start: NaiveDate::from_ymd_opt(2017, 7, 3).unwrap_or_default(),
                },
                coordinator: CoordinatorConfig {
                    join_probability: 0.3,
                    max_joins: 6,
                    max_attempts: 30,
                    lead_times: vec![30, 60, 90],
                    work_before_joined_meeting: 15,
                },
                private_activity: PrivateActivityConfig {
                    morning_minutes: 60,
                    evening_minutes: 120,
                    travel_buffer_minutes: 0,
                },
                company: CompanyConfig {
                    boss_share: 0.01,
                    middle_management_share: 0.1,
                    offices: 2,
                },
            },
            demographics: Demographics {
                female_share: 0.5,
                age: AgeRanges {
                    female: IntRange { min: 18, max: 64 },
                    male: IntRange { min: 18, max: 64 },
                },
                working_time: TierTable {
                    boss: vec![long_hours(2700), long_hours(3000)],
                    middle_management: vec![long_hours(2400), long_hours(2700)],
                    worker: vec![
                        full_time(0.5, 0.85),
                        WorkingTimeOption {
                            weekly_minutes: 1800,
                            working_days: 5,
                            female_weight: 0.3,
                            male_weight: 0.1,
                        },
                        WorkingTimeOption {
                            weekly_minutes: 1200,
                            working_days: 4,
                            female_weight: 0.2,
                            male_weight: 0.05,
                        },
                    ],
                },
                meeting_share_percent: TierTable {
                    boss: ShareRange { min: 20.0, max: 40.0 },
                    middle_management: ShareRange { min: 10.0, max: 20.0 },
                    worker: ShareRange { min: 0.0, max: 10.0 },
                },
                work_begin_minutes: vec![420, 450, 480, 510, 540],
                meeting_duration_minutes: vec![30, 60, 90, 120, 180],
                private_activity_probability: PrivateProbabilities {
                    morning: 0.1,
                    evening: 0.3,
                },
                locations: LocationPools {
                    homes: IntRange { min: 100, max: 999 },
                    offices: vec![1, 2, 3, 4, 5],
                },
            },
        }
    }
}

fn ensure(condition: bool, field: &str, message: &str) -> EngineResult<()> {
    if condition {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: message.to_string(),
        })
    }
}

fn ensure_probability(value: f64, field: &str) -> EngineResult<()> {
    ensure((0.0..=1.0).contains(&value), field, "must be within [0, 1]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.travel_buffer(), 30);
        assert_eq!(config.settings().coordinator.lead_times, vec![30, 60, 90]);
    }

    #[test]
    fn test_tier_table_lookup() {
        let config = GeneratorConfig::default();
        let shares = &config.demographics().meeting_share_percent;
        assert_eq!(shares.get(EmployeeTier::Boss).min, 20.0);
        assert_eq!(shares.get(EmployeeTier::Worker).max, 10.0);
    }

    #[test]
    fn test_rejects_join_probability_above_one() {
        let mut settings = GeneratorConfig::default().settings().clone();
        settings.coordinator.join_probability = 1.5;
        let demographics = GeneratorConfig::default().demographics().clone();

        match GeneratorConfig::new(settings, demographics) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "coordinator.join_probability");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_rejects_working_time_without_home_gap() {
        let settings = GeneratorConfig::default().settings().clone();
        let mut demographics = GeneratorConfig::default().demographics().clone();
        demographics.working_time.worker.push(WorkingTimeOption {
            weekly_minutes: 1400 * 5,
            working_days: 5,
            female_weight: 1.0,
            male_weight: 1.0,
        });

        match GeneratorConfig::new(settings, demographics) {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "working_time.worker");
                assert!(message.contains("no time at home"));
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_rejects_single_office_pool() {
        let mut settings = GeneratorConfig::default().settings().clone();
        settings.company.offices = 1;
        let mut demographics = GeneratorConfig::default().demographics().clone();
        demographics.locations.offices = vec![1];

        assert!(matches!(
            GeneratorConfig::new(settings, demographics),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_lead_times() {
        let mut settings = GeneratorConfig::default().settings().clone();
        settings.coordinator.lead_times.clear();
        let demographics = GeneratorConfig::default().demographics().clone();

        assert!(GeneratorConfig::new(settings, demographics).is_err());
    }
}

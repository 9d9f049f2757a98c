//! Sampler backed by the configured demographic tables.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{Demographics, GeneratorConfig};
use crate::models::{EmployeeTier, Gender, LocationId, TimePoint};

use super::Sampler;

/// Random home draws before falling back to a scan of the pool.
const MAX_HOME_DRAWS: usize = 64;

/// Draws from the [`Demographics`] tables using the wrapped RNG.
///
/// # Example
///
/// ```
/// use activity_calendar::config::GeneratorConfig;
/// use activity_calendar::sampling::{ConfiguredSampler, Sampler};
///
/// let config = GeneratorConfig::default();
/// let mut a = ConfiguredSampler::seeded(&config, 7);
/// let mut b = ConfiguredSampler::seeded(&config, 7);
/// assert_eq!(a.work_begin(), b.work_begin());
/// ```
#[derive(Debug, Clone)]
pub struct ConfiguredSampler<R> {
    demographics: Demographics,
    rng: R,
}

impl<R: Rng> ConfiguredSampler<R> {
    /// Creates a sampler over the given configuration and RNG.
    pub fn new(config: &GeneratorConfig, rng: R) -> Self {
        Self {
            demographics: config.demographics().clone(),
            rng,
        }
    }
}

impl ConfiguredSampler<ChaCha8Rng> {
    /// Creates a reproducible sampler from a seed.
    pub fn seeded(config: &GeneratorConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler for ConfiguredSampler<R> {
    fn gender(&mut self) -> Gender {
        if self.rng.gen_bool(self.demographics.female_share) {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    fn age(&mut self, gender: Gender) -> u32 {
        let range = match gender {
            Gender::Female => self.demographics.age.female,
            Gender::Male => self.demographics.age.male,
        };
        self.rng.gen_range(range.min..=range.max)
    }

    fn working_time(&mut self, gender: Gender, tier: EmployeeTier) -> (TimePoint, u32) {
        let options = self.demographics.working_time.get(tier);
        let weights = options.iter().map(|o| match gender {
            Gender::Female => o.female_weight,
            Gender::Male => o.male_weight,
        });
        let index = match WeightedIndex::new(weights) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 0,
        };
        options
            .get(index)
            .map(|o| (o.weekly_minutes, o.working_days))
            .unwrap_or((2400, 5))
    }

    fn work_begin(&mut self) -> TimePoint {
        self.demographics
            .work_begin_minutes
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(480)
    }

    fn meeting_share(&mut self, tier: EmployeeTier) -> f64 {
        let share = self.demographics.meeting_share_percent.get(tier);
        if share.max > share.min {
            self.rng.gen_range(share.min..=share.max)
        } else {
            share.min
        }
    }

    fn home_location(&mut self, exclude: &[LocationId]) -> LocationId {
        let homes = self.demographics.locations.homes;
        for _ in 0..MAX_HOME_DRAWS {
            let candidate = self.rng.gen_range(homes.min..=homes.max);
            if !exclude.contains(&candidate) {
                return candidate;
            }
        }
        // Mostly excluded pool: take the first free location, or any if none is free.
        (homes.min..=homes.max)
            .find(|candidate| !exclude.contains(candidate))
            .unwrap_or(homes.min)
    }

    fn office_location(&mut self, exclude: &[LocationId]) -> LocationId {
        let offices = &self.demographics.locations.offices;
        let candidates: Vec<LocationId> = offices
            .iter()
            .copied()
            .filter(|o| !exclude.contains(o))
            .collect();
        let pool = if candidates.is_empty() {
            offices.as_slice()
        } else {
            candidates.as_slice()
        };
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn meeting_duration(&mut self) -> TimePoint {
        self.demographics
            .meeting_duration_minutes
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(60)
    }

    fn private_morning(&mut self) -> bool {
        self.rng
            .gen_bool(self.demographics.private_activity_probability.morning)
    }

    fn private_evening(&mut self) -> bool {
        self.rng
            .gen_bool(self.demographics.private_activity_probability.evening)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }

    fn count(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}

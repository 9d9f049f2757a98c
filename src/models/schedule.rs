//! Schedule model.
//!
//! A [`Schedule`] is the ordered, non-overlapping sequence of periods owned by
//! one employee. `add` and `remove` do not check for overlaps; the generation
//! passes compute placements that are overlap-free by construction, and
//! [`Schedule::validate`] exists to assert that in tests and debug builds.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::timeperiod::{ActivityKind, TimePoint, Timeperiod};

/// An employee's weekly calendar, sorted ascending by `begin`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    items: Vec<Timeperiod>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a period, keeping the schedule sorted by `begin`.
    ///
    /// Periods with equal `begin` keep their insertion order.
    pub fn add(&mut self, period: Timeperiod) {
        let index = self.items.partition_point(|p| p.begin() <= period.begin());
        self.items.insert(index, period);
    }

    /// Removes the first period equal to `period`.
    ///
    /// Within a consistent schedule no two periods share their bounds, so
    /// value equality identifies a single period.
    pub fn remove(&mut self, period: &Timeperiod) -> EngineResult<Timeperiod> {
        let index = self
            .items
            .iter()
            .position(|p| p == period)
            .ok_or_else(|| EngineError::PeriodNotFound {
                period: period.to_string(),
            })?;
        Ok(self.items.remove(index))
    }

    /// Replaces `old` with the given periods.
    pub fn replace(
        &mut self,
        old: &Timeperiod,
        replacements: impl IntoIterator<Item = Timeperiod>,
    ) -> EngineResult<()> {
        self.remove(old)?;
        for period in replacements {
            self.add(period);
        }
        Ok(())
    }

    /// Returns all periods of the given kind, in schedule order.
    pub fn all_of(&self, kind: ActivityKind) -> Vec<Timeperiod> {
        self.items
            .iter()
            .filter(|p| p.activity() == kind)
            .copied()
            .collect()
    }

    /// Sums the length of all periods of the given kind.
    pub fn total_minutes(&self, kind: ActivityKind) -> TimePoint {
        self.items
            .iter()
            .filter(|p| p.activity() == kind)
            .map(Timeperiod::minutes)
            .sum()
    }

    /// Returns the periods in schedule order.
    pub fn periods(&self) -> &[Timeperiod] {
        &self.items
    }

    /// Iterates over the periods in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Timeperiod> {
        self.items.iter()
    }

    /// Number of periods in the schedule.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the schedule holds no periods.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if every period is non-empty, the schedule is sorted and
    /// no two adjacent periods overlap.
    pub fn is_consistent(&self) -> bool {
        self.items.iter().all(Timeperiod::is_valid)
            && self
                .items
                .windows(2)
                .all(|pair| pair[0].end() <= pair[1].begin())
    }

    /// Checks the schedule invariants, naming the first offending period.
    pub fn validate(&self, employee_id: u32) -> EngineResult<()> {
        if let Some(empty) = self.items.iter().find(|p| !p.is_valid()) {
            return Err(EngineError::ScheduleConflict {
                employee_id,
                message: format!("empty period {}", empty),
            });
        }

        if let Some(pair) = self
            .items
            .windows(2)
            .find(|pair| pair[0].end() > pair[1].begin())
        {
            return Err(EngineError::ScheduleConflict {
                employee_id,
                message: format!("{} overlaps {}", pair[0], pair[1]),
            });
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Timeperiod;
    type IntoIter = std::slice::Iter<'a, Timeperiod>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(begin: TimePoint, end: TimePoint) -> Timeperiod {
        Timeperiod::new(begin, end, 1, ActivityKind::Work)
    }

    fn home(begin: TimePoint, end: TimePoint) -> Timeperiod {
        Timeperiod::new(begin, end, 2, ActivityKind::Home)
    }

    #[test]
    fn test_add_keeps_sorted_order() {
        let mut schedule = Schedule::new();
        schedule.add(work(1920, 2400));
        schedule.add(home(990, 1890));
        schedule.add(work(480, 960));

        let begins: Vec<TimePoint> = schedule.iter().map(|p| p.begin()).collect();
        assert_eq!(begins, vec![480, 990, 1920]);
    }

    #[test]
    fn test_remove_missing_period_returns_not_found() {
        let mut schedule = Schedule::new();
        schedule.add(work(480, 960));

        let result = schedule.remove(&work(480, 900));
        match result {
            Err(EngineError::PeriodNotFound { period }) => {
                assert!(period.contains("Work"));
            }
            _ => panic!("Expected PeriodNotFound error"),
        }
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_remove_then_add_round_trip_is_unchanged() {
        let mut schedule = Schedule::new();
        schedule.add(work(480, 960));
        schedule.add(home(990, 1890));
        schedule.add(work(1920, 2400));
        let before = schedule.clone();

        let removed = schedule.remove(&home(990, 1890)).unwrap();
        schedule.add(removed);

        assert_eq!(schedule, before);
    }

    #[test]
    fn test_all_of_filters_in_schedule_order() {
        let mut schedule = Schedule::new();
        schedule.add(work(1920, 2400));
        schedule.add(home(990, 1890));
        schedule.add(work(480, 960));

        let works = schedule.all_of(ActivityKind::Work);
        assert_eq!(works, vec![work(480, 960), work(1920, 2400)]);
        assert!(schedule.all_of(ActivityKind::Meeting).is_empty());
    }

    #[test]
    fn test_replace_splits_period() {
        let mut schedule = Schedule::new();
        schedule.add(work(480, 960));

        let meeting = Timeperiod::new(600, 720, 9, ActivityKind::Meeting);
        schedule
            .replace(
                &work(480, 960),
                [work(480, 570), meeting, work(750, 960)],
            )
            .unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.total_minutes(ActivityKind::Meeting), 120);
        assert!(schedule.is_consistent());
    }

    #[test]
    fn test_validate_reports_overlap() {
        let mut schedule = Schedule::new();
        schedule.add(work(480, 960));
        schedule.add(home(950, 1890));

        assert!(!schedule.is_consistent());
        match schedule.validate(3) {
            Err(EngineError::ScheduleConflict {
                employee_id,
                message,
            }) => {
                assert_eq!(employee_id, 3);
                assert!(message.contains("overlaps"));
            }
            _ => panic!("Expected ScheduleConflict error"),
        }
    }

    #[test]
    fn test_validate_reports_empty_period() {
        let mut schedule = Schedule::new();
        schedule.add(home(1890, 1890));

        assert!(matches!(
            schedule.validate(1),
            Err(EngineError::ScheduleConflict { .. })
        ));
    }

    #[test]
    fn test_touching_periods_are_consistent() {
        let mut schedule = Schedule::new();
        schedule.add(home(0, 60));
        schedule.add(Timeperiod::new(60, 120, 5, ActivityKind::Private));

        assert!(schedule.validate(1).is_ok());
    }

    #[test]
    fn test_serializes_as_list() {
        let mut schedule = Schedule::new();
        schedule.add(work(480, 960));

        let json = serde_json::to_value(&schedule).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["activity"], "Work");
    }
}

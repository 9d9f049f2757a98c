//! Company model: the employees generated for one instance.

use serde::{Deserialize, Serialize};

use super::activity_record::ActivityRecord;
use super::employee::{Employee, EmployeeTier};
use super::timeperiod::{LocationId, Timeperiod};

/// A generated company with finalized employee schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Office locations; every employee is assigned one of them.
    pub offices: Vec<LocationId>,
    /// Employees in id order.
    pub employees: Vec<Employee>,
    /// Meetings created during generation, in creation order.
    pub meetings: Vec<Timeperiod>,
}

impl Company {
    /// Number of employees of the given tier.
    pub fn count_of(&self, tier: EmployeeTier) -> usize {
        self.employees.iter().filter(|e| e.tier == tier).count()
    }

    /// Flattens every schedule into activity records, employee by employee.
    pub fn activity_records(&self) -> Vec<ActivityRecord> {
        self.employees
            .iter()
            .flat_map(Employee::activity_records)
            .collect()
    }
}

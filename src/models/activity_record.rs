//! Flat per-activity records handed to the mobility-offer generators.

use serde::{Deserialize, Serialize};

use super::timeperiod::{ActivityKind, LocationId, TimePoint, Timeperiod};

/// One scheduled activity of one employee.
///
/// A traveller must arrive at `id` no later than the period's begin and may
/// leave no earlier than its end.
///
/// # Example
///
/// ```
/// use activity_calendar::models::{ActivityKind, ActivityRecord, Timeperiod};
///
/// let work = Timeperiod::new(480, 960, 1, ActivityKind::Work);
/// let record = ActivityRecord::from_period(12, &work);
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["assignedUser"], 12);
/// assert_eq!(json["latestArrival"], 480);
/// assert_eq!(json["earliestDeparture"], 960);
/// assert_eq!(json["serviceDuration"], 480);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// The employee the activity belongs to.
    pub assigned_user: u32,
    /// Location of the activity.
    #[serde(rename = "id")]
    pub location: LocationId,
    /// Kind of activity.
    #[serde(rename = "type")]
    pub activity: ActivityKind,
    /// End of the period.
    pub earliest_departure: TimePoint,
    /// Begin of the period.
    pub latest_arrival: TimePoint,
    /// Length of the period in minutes.
    pub service_duration: TimePoint,
}

impl ActivityRecord {
    /// Projects a period of the given employee into a record.
    pub fn from_period(assigned_user: u32, period: &Timeperiod) -> Self {
        Self {
            assigned_user,
            location: period.location(),
            activity: period.activity(),
            earliest_departure: period.end(),
            latest_arrival: period.begin(),
            service_duration: period.minutes(),
        }
    }
}

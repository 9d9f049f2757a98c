//! Response types for the activity calendar API.
//!
//! This module defines the generated-instance payload, the error response
//! structures, and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    ActivityKind, ActivityRecord, Company, Employee, EmployeeTier, Gender, LocationId, TimePoint,
    Timeperiod, minutes_to_hours, to_datetime,
};

/// A generated instance as returned by `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Unique identifier of this instance.
    pub instance_id: Uuid,
    /// Seed that reproduces the instance.
    pub seed: u64,
    /// When the instance was generated.
    pub generated_at: DateTime<Utc>,
    /// Monday the rendered timestamps are anchored to.
    pub week_start: NaiveDate,
    /// Aggregate figures.
    pub summary: GenerationSummary,
    /// Employees with their schedules.
    pub employees: Vec<EmployeeView>,
    /// Flat activity records for downstream consumers.
    pub activities: Vec<ActivityRecord>,
}

/// Aggregate figures of a generated instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Total number of employees.
    pub employees: usize,
    /// Number of bosses.
    pub bosses: usize,
    /// Number of middle managers.
    pub middle_management: usize,
    /// Number of workers.
    pub workers: usize,
    /// Office locations in use.
    pub offices: Vec<LocationId>,
    /// Meetings created (joined meetings are not counted again).
    pub meetings_created: usize,
    /// Sum of all employees' scheduled meeting hours.
    pub total_meeting_hours: Decimal,
}

/// One employee in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeView {
    /// Employee identifier.
    pub id: u32,
    /// Age in years.
    pub age: u32,
    /// Gender.
    pub gender: Gender,
    /// Hierarchy tier.
    pub tier: EmployeeTier,
    /// Home location.
    pub home: LocationId,
    /// Office location.
    pub office: LocationId,
    /// Working days per week.
    pub working_days: u32,
    /// Contracted weekly hours.
    pub weekly_hours: Decimal,
    /// Scheduled meeting hours.
    pub meeting_hours: Decimal,
    /// Schedule in chronological order.
    pub periods: Vec<PeriodView>,
}

/// One schedule period with minute offsets and rendered timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodView {
    /// Kind of activity.
    pub activity: ActivityKind,
    /// Location of the activity.
    pub location: LocationId,
    /// Start in minutes since the week start.
    pub begin: TimePoint,
    /// End in minutes since the week start.
    pub end: TimePoint,
    /// Start as a calendar timestamp.
    pub starts_at: NaiveDateTime,
    /// End as a calendar timestamp.
    pub ends_at: NaiveDateTime,
}

impl GenerateResponse {
    /// Builds the response for a generated company.
    pub fn from_company(company: &Company, seed: u64, week_start: NaiveDate) -> Self {
        let total_meeting_minutes: TimePoint =
            company.employees.iter().map(|e| e.meeting_minutes).sum();

        Self {
            instance_id: Uuid::new_v4(),
            seed,
            generated_at: Utc::now(),
            week_start,
            summary: GenerationSummary {
                employees: company.employees.len(),
                bosses: company.count_of(EmployeeTier::Boss),
                middle_management: company.count_of(EmployeeTier::MiddleManagement),
                workers: company.count_of(EmployeeTier::Worker),
                offices: company.offices.clone(),
                meetings_created: company.meetings.len(),
                total_meeting_hours: minutes_to_hours(total_meeting_minutes),
            },
            employees: company
                .employees
                .iter()
                .map(|e| EmployeeView::new(e, week_start))
                .collect(),
            activities: company.activity_records(),
        }
    }
}

impl EmployeeView {
    fn new(employee: &Employee, week_start: NaiveDate) -> Self {
        Self {
            id: employee.id,
            age: employee.age,
            gender: employee.gender,
            tier: employee.tier,
            home: employee.home,
            office: employee.office,
            working_days: employee.working_days,
            weekly_hours: employee.weekly_hours(),
            meeting_hours: employee.meeting_hours(),
            periods: employee
                .schedule
                .iter()
                .map(|p| PeriodView::new(p, week_start))
                .collect(),
        }
    }
}

impl PeriodView {
    fn new(period: &Timeperiod, week_start: NaiveDate) -> Self {
        Self {
            activity: period.activity(),
            location: period.location(),
            begin: period.begin(),
            end: period.end(),
            starts_at: to_datetime(week_start, period.begin()),
            ends_at: to_datetime(week_start, period.end()),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error response for a generation run that broke an invariant.
    pub fn generation_failed(details: impl Into<String>) -> Self {
        Self::with_details("GENERATION_ERROR", "Generation failed", details)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid value for '{}': {}", field, message),
                    "The request parameters cannot be satisfied by the loaded configuration",
                ),
            },
            EngineError::InvalidEmployee { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::generation_failed(format!(
                    "Sampled employee has invalid '{}': {}",
                    field, message
                )),
            },
            err @ (EngineError::PeriodNotFound { .. } | EngineError::ScheduleConflict { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::generation_failed(err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generation::create_company;
    use crate::sampling::ConfiguredSampler;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 7, 3).unwrap()
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_config_maps_to_bad_request() {
        let engine_error = EngineError::InvalidConfig {
            field: "offices".to_string(),
            message: "must be between 1 and 5".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("offices"));
    }

    #[test]
    fn test_schedule_conflict_maps_to_server_error() {
        let engine_error = EngineError::ScheduleConflict {
            employee_id: 4,
            message: "overlap".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "GENERATION_ERROR");
    }

    #[test]
    fn test_response_summary_matches_company() {
        let config = GeneratorConfig::default();
        let mut sampler = ConfiguredSampler::seeded(&config, 5);
        let company = create_company(40, 2, &config, &mut sampler).unwrap();

        let response = GenerateResponse::from_company(&company, 5, monday());

        assert_eq!(response.summary.employees, 40);
        assert_eq!(
            response.summary.bosses + response.summary.middle_management + response.summary.workers,
            40
        );
        assert_eq!(response.summary.meetings_created, company.meetings.len());
        let periods: usize = response.employees.iter().map(|e| e.periods.len()).sum();
        assert_eq!(periods, response.activities.len());
    }

    #[test]
    fn test_period_view_renders_timestamps() {
        let work = Timeperiod::new(480, 960, 1, ActivityKind::Work);
        let view = PeriodView::new(&work, monday());

        assert_eq!(view.starts_at.to_string(), "2017-07-03 08:00:00");
        assert_eq!(view.ends_at.to_string(), "2017-07-03 16:00:00");
    }
}

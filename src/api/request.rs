//! Request types for the activity calendar API.
//!
//! This module defines the JSON request structure for the `/generate` endpoint.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest company a single request may generate.
pub const MAX_EMPLOYEES: usize = 10_000;

/// Request body for the `/generate` endpoint.
///
/// Only `employees` is required. Omitted fields fall back to the loaded
/// configuration (`offices`, `week_start`) or to a random seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Number of employees to generate.
    pub employees: usize,
    /// Number of distinct office locations.
    #[serde(default)]
    pub offices: Option<usize>,
    /// Seed for the random source; the same seed reproduces the instance.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Monday used to render time points as calendar timestamps.
    #[serde(default)]
    pub week_start: Option<NaiveDate>,
}

impl GenerateRequest {
    /// Checks request parameters that the generator itself does not.
    ///
    /// The office count is checked against the configured pool by
    /// [`crate::generation::create_company`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.employees == 0 || self.employees > MAX_EMPLOYEES {
            return Err(EngineError::InvalidConfig {
                field: "employees".to_string(),
                message: format!("must be between 1 and {}", MAX_EMPLOYEES),
            });
        }
        if let Some(week_start) = self.week_start {
            if week_start.weekday() != Weekday::Mon {
                return Err(EngineError::InvalidConfig {
                    field: "week_start".to_string(),
                    message: format!(
                        "{} is a {}, expected a Monday",
                        week_start,
                        week_start.weekday()
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(employees: usize) -> GenerateRequest {
        GenerateRequest {
            employees,
            offices: None,
            seed: None,
            week_start: None,
        }
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let request: GenerateRequest = serde_json::from_str(r#"{"employees": 25}"#).unwrap();

        assert_eq!(request.employees, 25);
        assert!(request.offices.is_none());
        assert!(request.seed.is_none());
        assert!(request.week_start.is_none());
    }

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{"employees": 10, "offices": 3, "seed": 42, "week_start": "2026-10-19"}"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.offices, Some(3));
        assert_eq!(request.seed, Some(42));
        assert_eq!(request.week_start, NaiveDate::from_ymd_opt(2026, 10, 19));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_company() {
        match request(0).validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "employees"),
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_company() {
        assert!(request(MAX_EMPLOYEES).validate().is_ok());
        assert!(request(MAX_EMPLOYEES + 1).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_week_start_not_monday() {
        let mut req = request(5);
        req.week_start = NaiveDate::from_ymd_opt(2026, 10, 21);

        match req.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "week_start"),
            _ => panic!("Expected InvalidConfig error"),
        }
    }
}

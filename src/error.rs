//! Error types for the activity calendar generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Infeasible meeting or private-activity placements are not errors; they are
//! skipped by the generation passes and never surface here.

use thiserror::Error;

/// The main error type for the activity calendar generator.
///
/// # Example
///
/// ```
/// use activity_calendar::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/generator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/generator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range or inconsistent.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, as a dotted path.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Sampled employee parameters cannot produce a valid weekly skeleton.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A period was removed from a schedule that does not contain it.
    #[error("Period not found in schedule: {period}")]
    PeriodNotFound {
        /// Rendering of the missing period.
        period: String,
    },

    /// Two periods of one schedule overlap or a period is empty.
    #[error("Schedule conflict for employee {employee_id}: {message}")]
    ScheduleConflict {
        /// The owner of the inconsistent schedule.
        employee_id: u32,
        /// Which periods conflict.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/generator.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/generator.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "coordinator.join_probability".to_string(),
            message: "must be within [0, 1]".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'coordinator.join_probability': must be within [0, 1]"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "working_days".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'working_days': must be at least 1"
        );
    }

    #[test]
    fn test_period_not_found_displays_period() {
        let error = EngineError::PeriodNotFound {
            period: "Mon 08:00-Mon 16:00 Work @1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Period not found in schedule: Mon 08:00-Mon 16:00 Work @1"
        );
    }

    #[test]
    fn test_schedule_conflict_displays_employee() {
        let error = EngineError::ScheduleConflict {
            employee_id: 7,
            message: "periods overlap".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Schedule conflict for employee 7: periods overlap"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

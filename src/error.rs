//! Errors raised by scheduling runs.

use std::fmt;

use crate::validation::ValidationError;

/// A scheduling run that could not start.
///
/// Every variant is raised before any process record is mutated.
/// Running out of simulated time is not an error; see
/// [`RunReport::horizon_reached`](crate::disciplines::RunReport::horizon_reached).
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Round Robin quantum was zero or negative.
    InvalidQuantum(i64),
    /// Simulation horizon was zero or negative.
    InvalidHorizon(i64),
    /// A process needs no CPU time and can never leave the Round Robin loop.
    NonPositiveBurst {
        /// Offending process name.
        name: String,
        /// Its burst time.
        burst: i64,
    },
    /// Opt-in input validation found problems.
    InvalidInput(Vec<ValidationError>),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuantum(q) => write!(f, "quantum must be positive, got {q}"),
            Self::InvalidHorizon(h) => write!(f, "horizon must be positive, got {h}"),
            Self::NonPositiveBurst { name, burst } => {
                write!(f, "process '{name}' has non-positive burst time {burst}")
            }
            Self::InvalidInput(errors) => {
                write!(f, "invalid input ({} problem(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_quantum() {
        assert_eq!(
            ScheduleError::InvalidQuantum(0).to_string(),
            "quantum must be positive, got 0"
        );
    }

    #[test]
    fn test_display_burst() {
        let err = ScheduleError::NonPositiveBurst {
            name: "P2".into(),
            burst: -1,
        };
        assert_eq!(err.to_string(), "process 'P2' has non-positive burst time -1");
    }

    #[test]
    fn test_display_invalid_input_lists_messages() {
        let err = ScheduleError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::EmptyName,
            "Process at index 0 has an empty name",
        )]);
        let text = err.to_string();
        assert!(text.starts_with("invalid input (1 problem(s))"));
        assert!(text.contains("index 0"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ScheduleError::InvalidHorizon(-5));
        assert_eq!(err.to_string(), "horizon must be positive, got -5");
    }
}

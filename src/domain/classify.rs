// Classification mappers - raw categorical fields to display categories
use crate::domain::view_model::DisplayCategory;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("unknown {field} value {value:?}")]
    UnknownCategory { field: &'static str, value: String },
}

/// Closed domain of booking statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    CheckedIn,
    CheckedOut,
    PreBooked,
}

impl FromStr for BookingStatus {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Checked-in" => Ok(Self::CheckedIn),
            "Checked-out" => Ok(Self::CheckedOut),
            "Pre-booked" => Ok(Self::PreBooked),
            other => Err(ClassifyError::UnknownCategory {
                field: "booking status",
                value: other.to_string(),
            }),
        }
    }
}

/// Closed domain of staff task priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl FromStr for TaskPriority {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            other => Err(ClassifyError::UnknownCategory {
                field: "task priority",
                value: other.to_string(),
            }),
        }
    }
}

/// Badge category for a booking row. Out-of-domain statuses are an error,
/// never a silently blank badge.
pub fn booking_status_tag(status: &str) -> Result<DisplayCategory, ClassifyError> {
    Ok(match status.parse::<BookingStatus>()? {
        BookingStatus::CheckedIn => DisplayCategory::Positive,
        BookingStatus::PreBooked => DisplayCategory::Informational,
        BookingStatus::CheckedOut => DisplayCategory::Neutral,
    })
}

/// Badge category for a staff task row.
pub fn priority_tag(priority: &str) -> Result<DisplayCategory, ClassifyError> {
    Ok(match priority.parse::<TaskPriority>()? {
        TaskPriority::High => DisplayCategory::Critical,
        TaskPriority::Medium => DisplayCategory::Warning,
        TaskPriority::Low => DisplayCategory::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_tag_covers_all_statuses() {
        assert_eq!(
            booking_status_tag("Checked-in").unwrap(),
            DisplayCategory::Positive
        );
        assert_eq!(
            booking_status_tag("Pre-booked").unwrap(),
            DisplayCategory::Informational
        );
        assert_eq!(
            booking_status_tag("Checked-out").unwrap(),
            DisplayCategory::Neutral
        );
    }

    #[test]
    fn test_booking_status_tag_rejects_unknown_status() {
        let err = booking_status_tag("Unknown").unwrap_err();
        assert_eq!(
            err,
            ClassifyError::UnknownCategory {
                field: "booking status",
                value: "Unknown".to_string(),
            }
        );
    }

    #[test]
    fn test_priority_tag_covers_all_priorities() {
        assert_eq!(priority_tag("High").unwrap(), DisplayCategory::Critical);
        assert_eq!(priority_tag("Medium").unwrap(), DisplayCategory::Warning);
        assert_eq!(priority_tag("Low").unwrap(), DisplayCategory::Default);
    }

    #[test]
    fn test_priority_tag_rejects_unknown_priority() {
        let err = priority_tag("Urgent").unwrap_err();
        assert_eq!(
            err,
            ClassifyError::UnknownCategory {
                field: "task priority",
                value: "Urgent".to_string(),
            }
        );
    }

    #[test]
    fn test_status_matching_is_case_sensitive() {
        assert!(booking_status_tag("checked-in").is_err());
        assert!(priority_tag("high").is_err());
    }
}
